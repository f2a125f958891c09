//! Status and priority labels with their display emphasis mapping.
//!
//! Status carries no transition rules: tasks move freely between the three
//! values in any direction. Both enumerations map onto a small set of
//! semantic emphasis levels used when rendering badges.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow label attached to a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the emphasis level used when displaying this status.
    #[must_use]
    pub const fn emphasis(self) -> Emphasis {
        match self {
            Self::Pending => Emphasis::Neutral,
            Self::InProgress => Emphasis::Caution,
            Self::Completed => Emphasis::Success,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Urgency label attached to a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    #[default]
    Low,
    /// Should be picked up soon.
    Medium,
    /// Needs attention now.
    High,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the emphasis level used when displaying this priority.
    #[must_use]
    pub const fn emphasis(self) -> Emphasis {
        match self {
            Self::Low => Emphasis::Neutral,
            Self::Medium => Emphasis::Caution,
            Self::High => Emphasis::Critical,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Semantic emphasis level for presenting a status or priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Default, unremarkable rendering.
    Neutral,
    /// Draws attention without signalling a problem.
    Caution,
    /// Positive outcome.
    Success,
    /// Demands immediate attention.
    Critical,
}

impl Emphasis {
    /// Returns the canonical label for this emphasis level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Caution => "caution",
            Self::Success => "success",
            Self::Critical => "critical",
        }
    }

    /// Maps a raw status label to its emphasis level.
    ///
    /// Unrecognized labels fall back to [`Emphasis::Neutral`] so callers
    /// rendering values straight off a row never fail.
    #[must_use]
    pub fn for_status_label(label: &str) -> Self {
        TaskStatus::try_from(label).map_or(Self::Neutral, TaskStatus::emphasis)
    }

    /// Maps a raw priority label to its emphasis level.
    ///
    /// Unrecognized labels fall back to [`Emphasis::Neutral`].
    #[must_use]
    pub fn for_priority_label(label: &str) -> Self {
        TaskPriority::try_from(label).map_or(Self::Neutral, TaskPriority::emphasis)
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

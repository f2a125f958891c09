//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Identifier of the owning user.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Status label.
    pub status: String,
    /// Priority label.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Identifier of the owning user.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Status label.
    pub status: String,
    /// Priority label.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when updating a task's mutable fields.
///
/// `treat_none_as_null` makes an absent description clear the column rather
/// than skip it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks, treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description; `None` clears the column.
    pub description: Option<String>,
    /// Replacement status label.
    pub status: String,
    /// Replacement priority label.
    pub priority: String,
    /// Refreshed update timestamp.
    pub updated_at: DateTime<Utc>,
}

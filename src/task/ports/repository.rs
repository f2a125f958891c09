//! Repository port for scoped task persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskScope};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every read and mutation takes a [`TaskScope`] and must apply it inside
/// the query itself. A mutation whose target exists but falls outside the
/// scope is indistinguishable from one whose target is missing: both return
/// [`TaskRepositoryError::NotFound`].
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns all tasks within the scope, ordered by `created_at`
    /// descending.
    ///
    /// An empty result is valid and means no tasks exist in the scope.
    async fn list(&self, scope: &TaskScope) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier within the scope.
    ///
    /// Returns `None` when the task does not exist or is outside the scope.
    async fn find_by_id(
        &self,
        id: TaskId,
        scope: &TaskScope,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Persists changes to an existing task within the scope.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no matching record is
    /// in scope.
    async fn update(&self, task: &Task, scope: &TaskScope) -> TaskRepositoryResult<()>;

    /// Permanently removes a task within the scope.
    ///
    /// Deletion is not idempotent: deleting an id that is already gone
    /// fails, so callers can distinguish "removed now" from "was not there."
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no matching record is
    /// in scope.
    async fn delete(&self, id: TaskId, scope: &TaskScope) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found or is not visible to the caller.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

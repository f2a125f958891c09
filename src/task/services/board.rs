//! Service layer orchestrating task operations for authenticated callers.

use crate::task::{
    domain::{
        Caller, Task, TaskAccessError, TaskDomainError, TaskId, TaskPatch, TaskPriority,
        TaskScope, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    ///
    /// Status and priority default to their initial labels.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status label.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial priority label.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The access policy refused the operation.
    #[error(transparent)]
    Access(#[from] TaskAccessError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskBoardError {
    /// Returns `true` when the failure is an infrastructure fault that may
    /// succeed if the caller retries with backoff.
    ///
    /// Validation, authorization, and not-found failures are permanent from
    /// the caller's perspective and must not be retried. The service itself
    /// never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Repository(TaskRepositoryError::Persistence(_))
        )
    }
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
///
/// Each operation derives the caller's scope from the access policy and
/// passes it to the repository, which enforces it inside the query.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title is blank and
    /// [`TaskBoardError::Repository`] when persistence fails; nothing is
    /// stored in either case.
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let mut task = Task::new(caller.id(), title, &*self.clock)
            .with_status(request.status)
            .with_priority(request.priority);
        if let Some(description) = request.description {
            task = task.with_description(description);
        }
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Lists the caller's own tasks, newest first.
    ///
    /// An empty result means the caller has no tasks yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing cannot be
    /// read.
    pub async fn list_for_owner(&self, caller: &Caller) -> TaskBoardResult<Vec<Task>> {
        let tasks = self
            .repository
            .list(&TaskScope::Owner(caller.id()))
            .await?;
        Ok(tasks)
    }

    /// Lists every task in the system, newest first. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Access`] when the caller is not an
    /// administrator and [`TaskBoardError::Repository`] when the listing
    /// cannot be read.
    pub async fn list_all(&self, caller: &Caller) -> TaskBoardResult<Vec<Task>> {
        caller.authorize_list_all()?;
        let tasks = self.repository.list(&TaskScope::All).await?;
        Ok(tasks)
    }

    /// Applies a partial update to a task the caller owns.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with a not-found failure when
    /// the id is absent or owned by someone else, and
    /// [`TaskBoardError::Domain`] when the patch carries a blank title; the
    /// stored record is unchanged in both cases.
    pub async fn update(
        &self,
        caller: &Caller,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskBoardResult<Task> {
        let scope = caller.mutate_scope();
        let mut task = self
            .repository
            .find_by_id(id, &scope)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch, &*self.clock)?;
        self.repository.update(&task, &scope).await?;
        Ok(task)
    }

    /// Permanently deletes a task within the caller's delete scope.
    ///
    /// A second delete of the same id fails: "already gone" is reported as
    /// not-found, never as success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with a not-found failure when
    /// the id is absent or outside the caller's scope.
    pub async fn delete(&self, caller: &Caller, id: TaskId) -> TaskBoardResult<()> {
        self.repository.delete(id, &caller.delete_scope()).await?;
        Ok(())
    }
}

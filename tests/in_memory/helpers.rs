//! Shared test helpers for in-memory task integration tests.

use chrono::Duration;
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus, TaskTitle, UserId,
    },
    services::TaskBoardService,
};

/// Service type exercised by the integration tests.
pub type TestService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
///
/// The repository is cheaply cloneable and shares state across clones, so
/// tests can seed it directly while driving the service built over it.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a service over the given repository handle.
pub fn service_over(repo: &InMemoryTaskRepository) -> TestService {
    TaskBoardService::new(Arc::new(repo.clone()), Arc::new(DefaultClock))
}

/// Builds a task whose timestamps lie `age` in the past.
///
/// Seeding records with explicit creation times keeps ordering assertions
/// deterministic.
///
/// # Errors
///
/// Returns an error if the title is not a valid task title.
pub fn task_created_ago(
    owner: UserId,
    title: &str,
    age: Duration,
) -> Result<Task, eyre::Report> {
    let created = DefaultClock.utc() - age;
    let validated = TaskTitle::new(title)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        owner,
        title: validated,
        description: None,
        status: TaskStatus::default(),
        priority: TaskPriority::default(),
        created_at: created,
        updated_at: created,
    }))
}

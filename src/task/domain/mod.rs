//! Domain model for owner-scoped task management.
//!
//! The task domain models task records, their status and priority labels,
//! and the role-based scoping rules that bound every read and mutation,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod access;
mod error;
mod ids;
mod labels;
mod task;

pub use access::{Caller, Role, TaskAccessError, TaskScope};
pub use error::{
    ParseRoleError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use ids::{TaskId, TaskTitle, UserId};
pub use labels::{Emphasis, TaskPriority, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskPatch};

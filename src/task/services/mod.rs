//! Application services for task board orchestration.

mod board;

pub use board::{CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService};

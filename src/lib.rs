//! Taskboard: task-management core with role-scoped data access.
//!
//! This crate provides the data-access and authorization contract behind a
//! task-management application: users create, edit, and delete personal
//! tasks; an administrator role views and deletes tasks across all users.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task records, access policy, and scoped persistence

pub mod task;

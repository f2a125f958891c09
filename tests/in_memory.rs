//! In-memory repository integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_board_tests`: Creation, listing, and update flows
//! - `access_control_tests`: Role scoping and delete authorization
//! - `ordering_tests`: Newest-first listing order

mod in_memory {
    pub mod helpers;

    mod access_control_tests;
    mod ordering_tests;
    mod task_board_tests;
}

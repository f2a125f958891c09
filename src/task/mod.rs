//! Owner-scoped task management.
//!
//! This module implements task records with status and priority labels,
//! creation, partial update, and permanent deletion, all bounded by a
//! role-based access policy: users see and mutate their own tasks, while
//! administrators list and delete across every owner. Scoping is applied
//! inside repository queries rather than by filtering results in calling
//! code. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

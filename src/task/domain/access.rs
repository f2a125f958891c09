//! Caller identity, roles, and the scoping rules applied to every query.
//!
//! Scopes are computed here and handed to repository implementations, which
//! must apply them inside the query itself. Calling code never post-filters
//! results to enforce authorization.

use super::{ParseRoleError, Task, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Role attached to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user: sees and mutates only their own tasks.
    User,
    /// Administrator: sees every task and may delete any of them.
    Admin,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Authenticated identity on whose behalf an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Caller {
    id: UserId,
    role: Role,
}

impl Caller {
    /// Creates a caller from an identity and role.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// Creates a regular-user caller.
    #[must_use]
    pub const fn user(id: UserId) -> Self {
        Self::new(id, Role::User)
    }

    /// Creates an administrator caller.
    #[must_use]
    pub const fn admin(id: UserId) -> Self {
        Self::new(id, Role::Admin)
    }

    /// Returns the caller's identity.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the caller's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` when the caller holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Returns the scope of records this caller may read.
    #[must_use]
    pub const fn view_scope(&self) -> TaskScope {
        match self.role {
            Role::User => TaskScope::Owner(self.id),
            Role::Admin => TaskScope::All,
        }
    }

    /// Returns the scope of records this caller may update.
    ///
    /// Updates are owner-bound for every role: administrators edit only
    /// their own tasks.
    #[must_use]
    pub const fn mutate_scope(&self) -> TaskScope {
        TaskScope::Owner(self.id)
    }

    /// Returns the scope of records this caller may delete.
    #[must_use]
    pub const fn delete_scope(&self) -> TaskScope {
        match self.role {
            Role::User => TaskScope::Owner(self.id),
            Role::Admin => TaskScope::All,
        }
    }

    /// Authorizes a system-wide listing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::AdminRequired`] when the caller is not an
    /// administrator.
    pub const fn authorize_list_all(&self) -> Result<(), TaskAccessError> {
        match self.role {
            Role::Admin => Ok(()),
            Role::User => Err(TaskAccessError::AdminRequired(self.id)),
        }
    }
}

/// Record visibility boundary applied inside repository queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskScope {
    /// Only records owned by the given user.
    Owner(UserId),
    /// Every record in the system.
    All,
}

impl TaskScope {
    /// Returns `true` when the scope covers the given task.
    #[must_use]
    pub fn permits(&self, task: &Task) -> bool {
        match self {
            Self::Owner(owner) => task.owner() == *owner,
            Self::All => true,
        }
    }
}

/// Errors raised by the access policy before any query is issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskAccessError {
    /// The caller lacks the admin role required for the operation.
    #[error("caller {0} lacks the admin role required to list all tasks")]
    AdminRequired(UserId),
}

//! User entity and its creation payload.

use crate::id::new_short_id;
use serde::{Deserialize, Serialize};

/// Persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// User-supplied fields for a new user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserInput {
    pub username: String,
    pub email: String,
}

impl User {
    /// Builds a user with a freshly generated short ID.
    pub fn from_input(input: NewUserInput) -> Self {
        Self {
            id: new_short_id(),
            username: input.username,
            email: input.email,
        }
    }
}

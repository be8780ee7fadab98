use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Stored user row. Only the salted hash of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration input before the password is hashed
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
    pub password: String,
}

impl NewUser {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "username must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.password.is_empty() {
            return Err(CoreError::Validation {
                message: "password must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("age", &self.age)
            .field("gender", &self.gender)
            .field("password", &"<redacted>")
            .finish()
    }
}

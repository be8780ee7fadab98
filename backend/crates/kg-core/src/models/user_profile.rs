use crate::User;

use serde::{Deserialize, Serialize};

/// Public view of a user, returned on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            age: user.age,
            gender: user.gender,
        }
    }
}

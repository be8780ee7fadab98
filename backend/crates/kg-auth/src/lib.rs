pub mod auth_service;
pub mod error;
pub mod password;

pub use auth_service::AuthService;
pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};

#[cfg(test)]
mod tests;

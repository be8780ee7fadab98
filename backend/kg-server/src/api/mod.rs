pub mod auth;
pub mod error;
pub mod history;
pub mod predictions;

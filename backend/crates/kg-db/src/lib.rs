pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::prediction_repository::PredictionRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations, shared by the server and test harnesses.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub mod prediction_repository;
pub mod user_repository;

pub mod error;
pub mod history_service;
pub mod prediction_service;

pub mod history;
pub mod prediction_history_dto;

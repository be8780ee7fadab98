pub mod model_kind;
pub mod prediction_label;
pub mod prediction_record;
pub mod severity_label;
pub mod user;
pub mod user_profile;

pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::model_kind::ModelKind;
pub use models::prediction_label::PredictionLabel;
pub use models::prediction_record::PredictionRecord;
pub use models::severity_label::SeverityLabel;
pub use models::user::{NewUser, User};
pub use models::user_profile::UserProfile;

#[cfg(test)]
mod tests;

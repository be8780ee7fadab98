use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One classification result tied to the user who requested it.
///
/// Records are append-only: created once per submission, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub username: String,
    pub image_name: String,
    pub prediction: String,
    pub model_used: String,
    pub predicted_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(
        username: String,
        image_name: String,
        prediction: String,
        model_used: String,
    ) -> Self {
        Self {
            username,
            image_name,
            prediction,
            model_used,
            predicted_at: Utc::now(),
        }
    }
}

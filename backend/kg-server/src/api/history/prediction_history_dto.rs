use kg_core::PredictionRecord;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictionHistoryDto {
    pub image_name: String,
    pub prediction: String,
    pub model_used: String,
    /// RFC 3339
    pub predicted_at: String,
}

impl From<PredictionRecord> for PredictionHistoryDto {
    fn from(record: PredictionRecord) -> Self {
        Self {
            image_name: record.image_name,
            prediction: record.prediction,
            model_used: record.model_used,
            predicted_at: record.predicted_at.to_rfc3339(),
        }
    }
}

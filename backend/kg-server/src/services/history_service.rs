use kg_core::PredictionRecord;
use kg_db::{PredictionRepository, Result as DbErrorResult};

use log::debug;
use sqlx::SqlitePool;

pub struct HistoryService {
    predictions: PredictionRepository,
}

impl HistoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            predictions: PredictionRepository::new(pool),
        }
    }

    /// Every prediction made for `username`, newest first. No pagination.
    pub async fn history(&self, username: &str) -> DbErrorResult<Vec<PredictionRecord>> {
        let records = self.predictions.find_by_username(username).await?;
        debug!("Loaded {} predictions for {}", records.len(), username);
        Ok(records)
    }
}

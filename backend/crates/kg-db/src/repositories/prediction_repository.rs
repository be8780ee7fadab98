use crate::{DbError, Result as DbErrorResult};

use kg_core::PredictionRecord;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct PredictionRow {
    uname: String,
    image_name: String,
    prediction: String,
    model_used: String,
    predicted_at: i64,
}

impl TryFrom<PredictionRow> for PredictionRecord {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: PredictionRow) -> DbErrorResult<Self> {
        let predicted_at = DateTime::from_timestamp_millis(r.predicted_at).ok_or_else(|| {
            DbError::Initialization {
                message: format!(
                    "Invalid timestamp in prediction_history.predicted_at: {}",
                    r.predicted_at
                ),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(PredictionRecord {
            username: r.uname,
            image_name: r.image_name,
            prediction: r.prediction,
            model_used: r.model_used,
            predicted_at,
        })
    }
}

/// Append-only store of classification results.
///
/// `predicted_at` is persisted as Unix milliseconds. History is returned
/// newest first; rows sharing a timestamp come back in reverse insertion order.
pub struct PredictionRepository {
    pool: SqlitePool,
}

impl PredictionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &PredictionRecord) -> DbErrorResult<()> {
        let predicted_at = record.predicted_at.timestamp_millis();

        sqlx::query(
            r#"
                INSERT INTO prediction_history (uname, image_name, prediction, model_used, predicted_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.username)
        .bind(&record.image_name)
        .bind(&record.prediction)
        .bind(&record.model_used)
        .bind(predicted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Vec<PredictionRecord>> {
        let rows = sqlx::query_as::<_, PredictionRow>(
            r#"
                SELECT uname, image_name, prediction, model_used, predicted_at
                FROM prediction_history
                WHERE uname = ?
                ORDER BY predicted_at DESC, id DESC
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PredictionRecord::try_from).collect()
    }

    pub async fn count_for_username(&self, username: &str) -> DbErrorResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM prediction_history WHERE uname = ?")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

//! Image submission: store the upload, grade it, record the result.

use crate::UPLOAD_ROUTE;
use crate::services::error::{PredictionError, Result as PredictionErrorResult};

use kg_classifier::KneeClassifier;
use kg_core::{PredictionLabel, PredictionRecord};
use kg_db::PredictionRepository;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use error_location::ErrorLocation;
use log::info;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sqlx::SqlitePool;

/// One uploaded file as it came off the form
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// What the result page needs to show
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub label: PredictionLabel,
    /// Stored file name, already stripped of any directory part
    pub image_name: String,
    /// URL the uploaded image is served from
    pub image_url: String,
    pub model: String,
}

pub struct PredictionService {
    classifier: Arc<KneeClassifier>,
    predictions: PredictionRepository,
    upload_dir: PathBuf,
}

impl PredictionService {
    pub fn new(pool: SqlitePool, classifier: Arc<KneeClassifier>, upload_dir: PathBuf) -> Self {
        Self {
            classifier,
            predictions: PredictionRepository::new(pool),
            upload_dir,
        }
    }

    /// Grade one uploaded image and append it to the user's history.
    ///
    /// Nothing is written, to disk or database, unless image, model and
    /// username are all present and non-empty. A whitespace-only model is
    /// present, and grades as an unknown model.
    pub async fn submit(
        &self,
        image: Option<UploadedImage>,
        model: Option<String>,
        username: Option<String>,
    ) -> PredictionErrorResult<PredictionOutcome> {
        let image = image.and_then(|upload| {
            sanitize_filename(&upload.filename).map(|name| (name, upload.bytes))
        });
        let model = model.filter(|m| !m.is_empty());
        let username = username.filter(|u| !u.is_empty());

        let (Some((image_name, bytes)), Some(model), Some(username)) = (&image, &model, &username)
        else {
            let mut fields = Vec::new();
            if image.is_none() {
                fields.push("my_image");
            }
            if model.is_none() {
                fields.push("model");
            }
            if username.is_none() {
                fields.push("username");
            }
            return Err(PredictionError::MissingFields {
                fields,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let image_path = self.store_upload(image_name, bytes).await?;
        info!(
            "Stored upload {} for {} ({} bytes)",
            image_path.display(),
            username,
            bytes.len()
        );

        let label = self
            .classifier
            .classify(bytes, model)
            .await
            .map_err(|source| PredictionError::Classifier {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let record = PredictionRecord::new(
            username.clone(),
            image_name.clone(),
            label.as_str().to_string(),
            model.clone(),
        );
        self.predictions
            .create(&record)
            .await
            .map_err(|source| PredictionError::Database {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Prediction for {}: {} via {}", username, label, model);

        Ok(PredictionOutcome {
            label,
            image_url: upload_url(image_name),
            image_name: image_name.clone(),
            model: model.clone(),
        })
    }

    /// Same name overwrites the previous upload
    async fn store_upload(&self, image_name: &str, bytes: &[u8]) -> PredictionErrorResult<PathBuf> {
        let path = self.upload_dir.join(image_name);

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|source| PredictionError::Storage {
                path: self.upload_dir.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| PredictionError::Storage {
                path: path.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(path)
    }
}

/// Everything but RFC 3986 unreserved characters is escaped in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// URL the stored upload `image_name` is served from
pub fn upload_url(image_name: &str) -> String {
    format!(
        "{}/{}",
        UPLOAD_ROUTE,
        utf8_percent_encode(image_name, PATH_SEGMENT)
    )
}

/// Keep only the final path component of a client-supplied file name.
///
/// Returns `None` when nothing usable is left (empty, `..`, trailing slash).
pub fn sanitize_filename(filename: &str) -> Option<String> {
    // Browsers on Windows may send the full client path
    let last = filename.rsplit(['/', '\\']).next()?.trim();

    Path::new(last)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

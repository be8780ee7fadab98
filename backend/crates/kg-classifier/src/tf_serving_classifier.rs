use crate::{Classifier, ClassifierError, ClassifierResult, ImageTensor};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: &'a [Vec<Vec<[f32; 3]>>],
}

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Vec<Vec<f32>>,
}

/// Classifier served by TensorFlow Serving over its REST API.
///
/// Calls `POST {endpoint}/v1/models/{model}:predict` with a one-image batch.
pub struct TfServingClassifier {
    endpoint: String,
    model: String,
    client: ReqwestClient,
}

impl TfServingClassifier {
    /// # Arguments
    /// * `endpoint` - Base URL of the model server (e.g., "http://127.0.0.1:8501")
    /// * `model` - Model name the server exposes
    /// * `timeout` - Per-request timeout
    #[track_caller]
    pub fn new(endpoint: &str, model: &str, timeout: Duration) -> ClassifierResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Setup {
                message: format!("failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }

    pub fn predict_url(&self) -> String {
        format!("{}/v1/models/{}:predict", self.endpoint, self.model)
    }

    #[track_caller]
    fn backend_error(&self, message: String) -> ClassifierError {
        ClassifierError::Backend {
            model: self.model.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl Classifier for TfServingClassifier {
    fn name(&self) -> &str {
        &self.model
    }

    async fn predict(&self, input: &ImageTensor) -> ClassifierResult<Vec<f32>> {
        let instances = [input.to_instance()];
        let url = self.predict_url();
        debug!("Requesting prediction from {}", url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest {
                instances: &instances,
            })
            .send()
            .await
            .map_err(|e| self.backend_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.backend_error(format!("HTTP {}: {}", status, body)));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| self.backend_error(format!("invalid response body: {}", e)))?;

        body.predictions
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::UnexpectedOutput {
                model: self.model.clone(),
                message: "empty predictions array".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

use crate::{Classifier, ClassifierError, ClassifierResult, ImageTensor, argmax};

use kg_core::{ModelKind, PredictionLabel, SeverityLabel};

use std::panic::Location;
use std::str::FromStr;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};

/// Both knee models behind one `classify(image, model_name)` entry point.
///
/// Built once at startup and shared immutably by every request.
pub struct KneeClassifier {
    vgg16: Arc<dyn Classifier>,
    mobilenet_v2: Arc<dyn Classifier>,
    input_size: u32,
}

impl KneeClassifier {
    pub fn new(
        vgg16: Arc<dyn Classifier>,
        mobilenet_v2: Arc<dyn Classifier>,
        input_size: u32,
    ) -> Self {
        Self {
            vgg16,
            mobilenet_v2,
            input_size,
        }
    }

    pub fn backend(&self, kind: ModelKind) -> &Arc<dyn Classifier> {
        match kind {
            ModelKind::Vgg16 => &self.vgg16,
            ModelKind::MobileNetV2 => &self.mobilenet_v2,
        }
    }

    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Classify raw image bytes with the named model.
    ///
    /// An unrecognized `model_name` is not an error: it yields
    /// `PredictionLabel::UnknownModel` and no model is invoked.
    pub async fn classify(
        &self,
        image_bytes: &[u8],
        model_name: &str,
    ) -> ClassifierResult<PredictionLabel> {
        let Ok(kind) = ModelKind::from_str(model_name) else {
            warn!("Unknown model requested: {:?}", model_name);
            return Ok(PredictionLabel::UnknownModel);
        };

        let bytes = image_bytes.to_vec();
        let size = self.input_size;
        let tensor =
            tokio::task::spawn_blocking(move || ImageTensor::from_image_bytes(&bytes, size))
                .await
                .map_err(|e| ClassifierError::Setup {
                    message: format!("preprocessing task failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })??;

        let backend = self.backend(kind);
        let scores = backend.predict(&tensor).await?;

        let label = argmax(&scores)
            .and_then(SeverityLabel::from_index)
            .ok_or_else(|| ClassifierError::UnexpectedOutput {
                model: backend.name().to_string(),
                message: format!("no severity grade for scores {:?}", scores),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("{} graded image as {}", kind, label);
        Ok(PredictionLabel::Graded(label))
    }
}

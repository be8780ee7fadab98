use crate::error::ensure_in_range;
use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_CLASSIFIER_ENDPOINT, DEFAULT_CLASSIFIER_TIMEOUT_SECS,
    DEFAULT_INPUT_SIZE, DEFAULT_MOBILENET_MODEL, DEFAULT_VGG16_MODEL, MAX_CLASSIFIER_TIMEOUT_SECS,
    MAX_INPUT_SIZE, MIN_CLASSIFIER_TIMEOUT_SECS, MIN_INPUT_SIZE,
};

use serde::Deserialize;

/// Where the two knee models are served and how images are shaped for them
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Base URL of the TensorFlow Serving REST API
    pub endpoint: String,
    pub vgg16_model: String,
    pub mobilenet_model: String,
    /// Square side length images are resized to
    pub input_size: u32,
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_CLASSIFIER_ENDPOINT),
            vgg16_model: String::from(DEFAULT_VGG16_MODEL),
            mobilenet_model: String::from(DEFAULT_MOBILENET_MODEL),
            input_size: DEFAULT_INPUT_SIZE,
            timeout_secs: DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::invalid(
                ConfigSection::Classifier,
                format!(
                    "classifier.endpoint must be an http(s) URL, got '{}'",
                    self.endpoint
                ),
            ));
        }

        if self.vgg16_model.trim().is_empty() || self.mobilenet_model.trim().is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Classifier,
                "classifier model names cannot be empty",
            ));
        }

        ensure_in_range(
            ConfigSection::Classifier,
            "input_size",
            self.input_size,
            MIN_INPUT_SIZE..=MAX_INPUT_SIZE,
        )?;
        ensure_in_range(
            ConfigSection::Classifier,
            "timeout_secs",
            self.timeout_secs,
            MIN_CLASSIFIER_TIMEOUT_SECS..=MAX_CLASSIFIER_TIMEOUT_SECS,
        )
    }
}

use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Pre-trained knee classifiers a prediction can be requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    #[serde(rename = "VGG16")]
    Vgg16,
    #[serde(rename = "MobileNetV2")]
    MobileNetV2,
}

impl ModelKind {
    /// Name as submitted by the upload form and stored in history
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vgg16 => "VGG16",
            Self::MobileNetV2 => "MobileNetV2",
        }
    }
}

impl FromStr for ModelKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "VGG16" => Ok(Self::Vgg16),
            "MobileNetV2" => Ok(Self::MobileNetV2),
            _ => Err(CoreError::InvalidModelKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

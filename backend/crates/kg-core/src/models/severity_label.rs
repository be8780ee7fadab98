use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Ordinal knee osteoarthritis severity grade produced by the classifiers.
///
/// The discriminant is the class index of the model output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityLabel {
    Normal = 0,
    Doubtful = 1,
    Mild = 2,
    Moderate = 3,
    Severe = 4,
}

impl SeverityLabel {
    pub const ALL: [SeverityLabel; 5] = [
        Self::Normal,
        Self::Doubtful,
        Self::Mild,
        Self::Moderate,
        Self::Severe,
    ];

    /// Map a model output class index to its label
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Doubtful => "Doubtful",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl FromStr for SeverityLabel {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSeverityLabel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

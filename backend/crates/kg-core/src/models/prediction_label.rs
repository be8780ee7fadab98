use crate::SeverityLabel;

/// Label stored for an unrecognized model name.
pub const UNKNOWN_MODEL_LABEL: &str = "Unknown model selected";

/// Outcome of a classification request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionLabel {
    Graded(SeverityLabel),
    /// The requested model name matched no classifier. Kept as a result
    /// rather than an error so the submission still completes.
    UnknownModel,
}

impl PredictionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Graded(label) => label.as_str(),
            Self::UnknownModel => UNKNOWN_MODEL_LABEL,
        }
    }

    pub fn severity(&self) -> Option<SeverityLabel> {
        match self {
            Self::Graded(label) => Some(*label),
            Self::UnknownModel => None,
        }
    }
}

impl From<SeverityLabel> for PredictionLabel {
    fn from(label: SeverityLabel) -> Self {
        Self::Graded(label)
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

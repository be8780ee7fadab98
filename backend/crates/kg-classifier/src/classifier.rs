use crate::{ClassifierResult, ImageTensor};

use async_trait::async_trait;

/// A pre-trained image classifier treated as a black box.
///
/// Implementations must be safe to call concurrently; they are shared
/// read-only across all requests.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Identifier used in logs and errors
    fn name(&self) -> &str;

    /// Class probabilities for a single preprocessed image
    async fn predict(&self, input: &ImageTensor) -> ClassifierResult<Vec<f32>>;
}

/// Index of the highest score. The first index wins on ties and NaN scores
/// are never selected.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| !score.is_nan())
        .fold(None, |best: Option<(usize, f32)>, (index, &score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
}

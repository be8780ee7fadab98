//! Knee X-ray classification.
//!
//! Two pre-trained models sit behind the [`Classifier`] trait. Their weights
//! live outside this process; [`TfServingClassifier`] reaches them over the
//! TensorFlow Serving REST API. [`KneeClassifier`] owns both backends and maps
//! raw model output onto the five severity grades.

pub mod classifier;
pub mod error;
pub mod image_tensor;
pub mod knee_classifier;
pub mod tf_serving_classifier;

pub use classifier::{Classifier, argmax};
pub use error::{ClassifierError, ClassifierResult};
pub use image_tensor::{DEFAULT_INPUT_SIZE, ImageTensor};
pub use knee_classifier::KneeClassifier;
pub use tf_serving_classifier::TfServingClassifier;

#[cfg(test)]
mod tests;

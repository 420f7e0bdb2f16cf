mod error;
mod linear;
mod onnx;

pub use error::ClassifierError;
pub use linear::{LinearClassifier, LinearParams};
pub use onnx::OnnxClassifier;

use crate::vectorizer::FeatureVector;

/// A pre-trained binary classifier.
///
/// Implementations are immutable once loaded and are shared across request
/// handlers, hence the `Send + Sync` bound.
pub trait Classify: Send + Sync {
    /// Predicts one label per input row, preserving order.
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError>;

    /// Input width the model expects, when it declares a fixed one.
    fn input_dimension(&self) -> Option<usize>;
}

pub(crate) fn check_row_width(row: &FeatureVector, expected: Option<usize>) -> Result<(), ClassifierError> {
    match expected {
        Some(width) if row.dimension() != width => Err(ClassifierError::ValidationError(format!(
            "Feature row has {} columns, model expects {}",
            row.dimension(),
            width
        ))),
        _ => Ok(()),
    }
}

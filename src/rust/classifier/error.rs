use ort::Error as OrtError;

/// Represents the different types of errors that can occur in the classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Error occurred while loading the model or starting the runtime
    #[error("Model error: {0}")]
    ModelError(String),
    /// Error occurred while making predictions
    #[error("Prediction error: {0}")]
    PredictionError(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::ModelError(err.to_string())
    }
}

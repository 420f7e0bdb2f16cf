use std::sync::Arc;

use crate::artifacts::Artifacts;
use crate::classifier::{ClassifierError, Classify};
use crate::vectorizer::{Vectorize, VectorizerError};

pub const HEALTH_MESSAGE: &str = "Fake News Detection API is running!";

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Vectorizer failed: {0}")]
    Vectorizer(#[from] VectorizerError),
    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("Classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(i64),
    #[error("{0} produced no output")]
    EmptyOutput(&'static str),
    #[error("Inference worker failed: {0}")]
    Worker(String),
}

/// The ready state of the service: a vectorizer, a classifier and the
/// offline accuracy figure, all read-only for the life of the process.
///
/// Cloning is cheap; all clones share the same artifacts.
#[derive(Clone)]
pub struct InferenceService {
    vectorizer: Arc<dyn Vectorize>,
    classifier: Arc<dyn Classify>,
    accuracy: f64,
}

impl InferenceService {
    pub fn new(vectorizer: Arc<dyn Vectorize>, classifier: Arc<dyn Classify>, accuracy: f64) -> Self {
        Self {
            vectorizer,
            classifier,
            accuracy,
        }
    }

    pub fn from_artifacts(artifacts: Artifacts) -> Self {
        Self::new(artifacts.vectorizer, artifacts.classifier, artifacts.accuracy)
    }

    pub fn health(&self) -> &'static str {
        HEALTH_MESSAGE
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Classifies one text and returns its label, 0 or 1.
    ///
    /// The text is passed to the vectorizer as a one-element batch and the
    /// single resulting row goes to the classifier. No length or content
    /// checks are applied; an empty string classifies as the zero row.
    pub fn predict(&self, text: &str) -> Result<u8, InferenceError> {
        let rows = self.vectorizer.transform(&[text])?;
        let row = rows.into_iter().next().ok_or(InferenceError::EmptyOutput("Vectorizer"))?;

        let labels = self.classifier.predict(std::slice::from_ref(&row))?;
        let label = labels.first().copied().ok_or(InferenceError::EmptyOutput("Classifier"))?;

        match label {
            0 => Ok(0),
            1 => Ok(1),
            other => Err(InferenceError::InvalidLabel(other)),
        }
    }

    /// Runs [`predict`](Self::predict) on the blocking pool so CPU-bound
    /// inference does not stall the async workers.
    pub async fn predict_blocking(&self, text: String) -> Result<u8, InferenceError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.predict(&text))
            .await
            .map_err(|e| InferenceError::Worker(e.to_string()))?
    }
}

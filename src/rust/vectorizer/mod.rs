mod analyzer;
mod features;
mod tfidf;
mod utils;

pub use features::FeatureVector;
pub use tfidf::{Norm, TfidfParams, TfidfVectorizer};

/// Errors raised while building or running a vectorizer.
#[derive(Debug, thiserror::Error)]
pub enum VectorizerError {
    /// The fitted parameters are inconsistent
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// A pre-fitted text-to-feature transformer.
///
/// Implementations are immutable once built and are shared across request
/// handlers, hence the `Send + Sync` bound.
pub trait Vectorize: Send + Sync {
    /// Maps each input text to one feature row, preserving order.
    fn transform(&self, texts: &[&str]) -> Result<Vec<FeatureVector>, VectorizerError>;

    /// Width of every row this vectorizer produces.
    fn dimension(&self) -> usize;
}

//! An HTTP inference service for a pre-trained fake news classifier.
//!
//! At startup the service loads three artifacts produced by an offline
//! training run: a fitted TF-IDF vectorizer, a binary classifier (ONNX or a
//! linear JSON export) and the accuracy figure measured on held-out data.
//! It then answers three requests for the life of the process:
//!
//! | Method | Path        | Response                                             |
//! |--------|-------------|------------------------------------------------------|
//! | GET    | `/`         | `{"message": "Fake News Detection API is running!"}` |
//! | POST   | `/predict`  | `{"prediction": 0 or 1}` for `{"text": "..."}`       |
//! | GET    | `/accuracy` | `{"accuracy": <float>}`                              |
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use newsverify::{ArtifactPaths, Artifacts, InferenceService, RuntimeConfig};
//!
//! let artifacts = Artifacts::load(&ArtifactPaths::default(), &RuntimeConfig::default())?;
//! let service = InferenceService::from_artifacts(artifacts);
//!
//! let label = service.predict("Scientists confirm water is wet")?;
//! println!("Predicted label: {}", label);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! [`InferenceService`] holds its artifacts behind `Arc` and never mutates
//! them, so clones can be handed to any number of request handlers.

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod inference;
mod runtime;
pub mod server;
pub mod vectorizer;

pub use artifacts::{ArtifactError, Artifacts};
pub use classifier::{ClassifierError, Classify, LinearClassifier, LinearParams, OnnxClassifier};
pub use config::{ArtifactPaths, ServerConfig};
pub use inference::{InferenceError, InferenceService, HEALTH_MESSAGE};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use vectorizer::{FeatureVector, TfidfParams, TfidfVectorizer, Vectorize, VectorizerError};

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

//! Startup loading of the classifier, vectorizer and accuracy artifacts.
//!
//! Every failure here is fatal: the service never starts half-loaded.

mod digest;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::classifier::{Classify, LinearClassifier, LinearParams, OnnxClassifier};
use crate::config::ArtifactPaths;
use crate::runtime::RuntimeConfig;
use crate::vectorizer::{TfidfParams, TfidfVectorizer, Vectorize};
use digest::ArtifactBlob;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("Invalid artifact {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
    #[error("Unsupported classifier format for {} (expected .onnx or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Vectorizer produces {vectorizer} features but the classifier expects {classifier}")]
    DimensionMismatch { vectorizer: usize, classifier: usize },
}

/// The three immutable artifacts the service is built from.
pub struct Artifacts {
    pub vectorizer: Arc<dyn Vectorize>,
    pub classifier: Arc<dyn Classify>,
    pub accuracy: f64,
}

impl Artifacts {
    /// Loads all three artifacts and checks that the vectorizer's output
    /// width matches the classifier's declared input width.
    pub fn load(paths: &ArtifactPaths, runtime: &RuntimeConfig) -> Result<Self, ArtifactError> {
        let vectorizer = load_vectorizer(&paths.vectorizer)?;
        let classifier = load_classifier(&paths.model, runtime)?;
        let accuracy = load_accuracy(&paths.accuracy)?;

        let features = vectorizer.dimension();
        match classifier.input_dimension() {
            Some(expected) if expected != features => {
                return Err(ArtifactError::DimensionMismatch {
                    vectorizer: features,
                    classifier: expected,
                });
            }
            Some(_) => info!("Vectorizer and classifier agree on {} features", features),
            None => info!(
                "Classifier input width is dynamic; vectorizer produces {} features",
                features
            ),
        }

        Ok(Self {
            vectorizer: Arc::new(vectorizer),
            classifier,
            accuracy,
        })
    }
}

fn read_blob(path: &Path) -> Result<ArtifactBlob, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ArtifactBlob::new(path, bytes))
}

fn parse_json<'a, T: Deserialize<'a>>(blob: &'a ArtifactBlob) -> Result<T, ArtifactError> {
    serde_json::from_slice(&blob.bytes).map_err(|source| ArtifactError::Parse {
        path: blob.path.clone(),
        source,
    })
}

fn invalid(blob: &ArtifactBlob, reason: impl ToString) -> ArtifactError {
    ArtifactError::Invalid {
        path: blob.path.clone(),
        reason: reason.to_string(),
    }
}

pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer, ArtifactError> {
    let blob = read_blob(path)?;
    let params: TfidfParams = parse_json(&blob)?;
    let vectorizer = TfidfVectorizer::from_params(params).map_err(|e| invalid(&blob, e))?;
    info!("Loaded vectorizer from {}", blob);
    Ok(vectorizer)
}

/// Loads a classifier, picking the decoder from the file extension.
pub fn load_classifier(path: &Path, runtime: &RuntimeConfig) -> Result<Arc<dyn Classify>, ArtifactError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let classifier: Arc<dyn Classify> = match extension.as_deref() {
        Some("onnx") => {
            let blob = read_blob(path)?;
            let classifier = OnnxClassifier::from_bytes(&blob.bytes, runtime).map_err(|e| invalid(&blob, e))?;
            info!("Loaded ONNX classifier from {}", blob);
            Arc::new(classifier)
        }
        Some("json") => {
            let blob = read_blob(path)?;
            let params: LinearParams = parse_json(&blob)?;
            let classifier = LinearClassifier::from_params(params).map_err(|e| invalid(&blob, e))?;
            info!("Loaded linear classifier from {}", blob);
            Arc::new(classifier)
        }
        _ => return Err(ArtifactError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(classifier)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccuracyFile {
    Bare(f64),
    Wrapped { accuracy: f64 },
}

pub fn load_accuracy(path: &Path) -> Result<f64, ArtifactError> {
    let blob = read_blob(path)?;
    let accuracy = match parse_json::<AccuracyFile>(&blob)? {
        AccuracyFile::Bare(value) | AccuracyFile::Wrapped { accuracy: value } => value,
    };
    if !accuracy.is_finite() {
        return Err(invalid(&blob, "accuracy must be a finite number"));
    }
    info!("Loaded accuracy {} from {}", accuracy, blob);
    Ok(accuracy)
}

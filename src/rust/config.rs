//! Service configuration
//!
//! Every setting comes from the environment; each variable also has a
//! mirroring long flag for local runs.

use std::path::{Path, PathBuf};

use clap::{Args, Parser};

use crate::runtime::RuntimeConfig;

pub const DEFAULT_PORT: u16 = 7000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_CORS_ORIGIN: &str = "https://news-verifier-kappa.vercel.app";
pub const DEFAULT_MODEL_PATH: &str = "trained_model.onnx";
pub const DEFAULT_VECTORIZER_PATH: &str = "vectorizer.json";
pub const DEFAULT_ACCURACY_PATH: &str = "accuracy.json";

/// Locations of the three artifacts, relative to the working directory
/// unless absolute.
#[derive(Debug, Clone, Args)]
pub struct ArtifactPaths {
    /// Classifier artifact (`.onnx` or linear `.json`)
    #[arg(long = "model", env = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Fitted vectorizer artifact
    #[arg(long = "vectorizer", env = "VECTORIZER_PATH", default_value = DEFAULT_VECTORIZER_PATH)]
    pub vectorizer: PathBuf,

    /// Offline accuracy artifact
    #[arg(long = "accuracy", env = "ACCURACY_PATH", default_value = DEFAULT_ACCURACY_PATH)]
    pub accuracy: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            vectorizer: PathBuf::from(DEFAULT_VECTORIZER_PATH),
            accuracy: PathBuf::from(DEFAULT_ACCURACY_PATH),
        }
    }
}

impl ArtifactPaths {
    /// Default file names resolved under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_PATH),
            vectorizer: dir.join(DEFAULT_VECTORIZER_PATH),
            accuracy: dir.join(DEFAULT_ACCURACY_PATH),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// The single origin allowed to make cross-origin requests
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    #[command(flatten)]
    pub artifacts: ArtifactPaths,

    /// ONNX Runtime intra-op threads (0 lets the runtime decide)
    #[arg(long, env = "ORT_INTRA_THREADS", default_value_t = 0)]
    pub intra_threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            artifacts: ArtifactPaths::default(),
            intra_threads: 0,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            intra_threads: self.intra_threads,
            ..Default::default()
        }
    }
}

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use env_logger::{Builder, Env};
use newsverify::ArtifactPaths;

pub const VECTORIZER_JSON: &str = r#"{
    "vocabulary": {
        "scientists": 0, "confirm": 1, "water": 2, "wet": 3,
        "hoax": 4, "shocking": 5, "secret": 6, "cure": 7
    },
    "idf": [1.5, 1.2, 1.0, 1.8, 2.5, 2.2, 2.0, 2.4],
    "lowercase": true,
    "ngram_range": [1, 1],
    "stop_words": ["is", "a", "the"],
    "norm": "l2",
    "use_idf": true,
    "smooth_idf": true,
    "sublinear_tf": false
}"#;

pub const MODEL_JSON: &str = r#"{
    "coef": [-1.0, -1.0, -0.2, -0.2, 1.5, 1.2, 1.0, 1.0],
    "intercept": 0.0,
    "classes": [0, 1]
}"#;

pub const ACCURACY_JSON: &str = "0.9374";

/// Vectorizer matching the width of `tests/fixtures/linear_2.onnx`.
pub const VECTORIZER_2_JSON: &str = r#"{
    "vocabulary": {"hoax": 0, "report": 1},
    "idf": [1.0, 1.0]
}"#;

pub const TRUE_STORY: &str = "Scientists confirm water is wet";
pub const FAKE_STORY: &str = "Shocking secret cure is a hoax";

/// Path of a committed fixture under `tests/fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

// Initialize test logger
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// A fresh directory under the system temp dir, unique per test name.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("newsverify-test-{}-{}", name, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes the three fixture artifacts (linear JSON classifier) and returns their paths.
pub fn write_artifacts(name: &str) -> ArtifactPaths {
    write_artifacts_with(name, VECTORIZER_JSON, MODEL_JSON, ACCURACY_JSON)
}

pub fn write_artifacts_with(name: &str, vectorizer: &str, model: &str, accuracy: &str) -> ArtifactPaths {
    let dir = scratch_dir(name);
    let paths = ArtifactPaths {
        model: dir.join("trained_model.json"),
        vectorizer: dir.join("vectorizer.json"),
        accuracy: dir.join("accuracy.json"),
    };
    fs::write(&paths.vectorizer, vectorizer).unwrap();
    fs::write(&paths.model, model).unwrap();
    fs::write(&paths.accuracy, accuracy).unwrap();
    paths
}

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use serde::Deserialize;

use super::analyzer::WordAnalyzer;
use super::features::FeatureVector;
use super::utils::{normalize_l1, normalize_l2};
use super::{Vectorize, VectorizerError};

/// Row normalisation applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_true() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// On-disk form of a fitted vectorizer. Field names and defaults follow
/// scikit-learn's `TfidfVectorizer` so an export is a plain attribute dump.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfParams {
    pub vocabulary: HashMap<String, usize>,
    #[serde(default)]
    pub idf: Option<Vec<f64>>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default = "default_true")]
    pub use_idf: bool,
    /// Only meaningful at fit time; accepted so exports round-trip.
    #[serde(default = "default_true")]
    pub smooth_idf: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub binary: bool,
}

impl TfidfParams {
    /// Parameters with scikit-learn defaults for the given vocabulary and idf.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Option<Vec<f64>>) -> Self {
        Self {
            use_idf: idf.is_some(),
            vocabulary,
            idf,
            lowercase: true,
            ngram_range: default_ngram_range(),
            stop_words: None,
            norm: default_norm(),
            smooth_idf: true,
            sublinear_tf: false,
            binary: false,
        }
    }
}

/// A fitted term-frequency / inverse-document-frequency transformer.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    analyzer: WordAnalyzer,
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    norm: Option<Norm>,
    sublinear_tf: bool,
    binary: bool,
}

impl TfidfVectorizer {
    /// Validates fitted parameters and builds the transformer.
    ///
    /// # Errors
    /// - `ValidationError` if the vocabulary is empty, has out-of-range or
    ///   duplicate indices, the idf table does not match the vocabulary, or
    ///   the n-gram range is malformed
    pub fn from_params(params: TfidfParams) -> Result<Self, VectorizerError> {
        let dimension = params.vocabulary.len();
        if dimension == 0 {
            return Err(VectorizerError::ValidationError("Vocabulary is empty".into()));
        }

        let mut seen = vec![false; dimension];
        for (term, &index) in &params.vocabulary {
            if index >= dimension {
                return Err(VectorizerError::ValidationError(format!(
                    "Term {:?} has index {} outside vocabulary of size {}",
                    term, index, dimension
                )));
            }
            if std::mem::replace(&mut seen[index], true) {
                return Err(VectorizerError::ValidationError(format!(
                    "Index {} is assigned to more than one term",
                    index
                )));
            }
        }

        let idf = if params.use_idf {
            let idf = params.idf.ok_or_else(|| {
                VectorizerError::ValidationError("use_idf is set but no idf table was provided".into())
            })?;
            if idf.len() != dimension {
                return Err(VectorizerError::ValidationError(format!(
                    "idf table has {} entries, vocabulary has {}",
                    idf.len(),
                    dimension
                )));
            }
            if idf.iter().any(|w| !w.is_finite()) {
                return Err(VectorizerError::ValidationError("idf table contains non-finite weights".into()));
            }
            Some(idf)
        } else {
            None
        };

        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(VectorizerError::ValidationError(format!(
                "Invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        let stop_words: HashSet<String> = params.stop_words.unwrap_or_default().into_iter().collect();
        debug!(
            "Vectorizer ready: {} terms, ngram_range=({}, {}), {} stop words, norm={:?}",
            dimension,
            min_n,
            max_n,
            stop_words.len(),
            params.norm
        );

        Ok(Self {
            analyzer: WordAnalyzer {
                lowercase: params.lowercase,
                min_n,
                max_n,
                stop_words,
            },
            vocabulary: params.vocabulary,
            idf,
            norm: params.norm,
            sublinear_tf: params.sublinear_tf,
            binary: params.binary,
        })
    }

    fn transform_one(&self, text: &str) -> FeatureVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyzer.analyze(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (&index, value) in counts.iter_mut() {
            if self.binary {
                *value = 1.0;
            } else if self.sublinear_tf {
                *value = 1.0 + value.ln();
            }
            if let Some(idf) = &self.idf {
                *value *= idf[index];
            }
        }

        let mut row = FeatureVector::from_entries(self.dimension(), counts);
        match self.norm {
            Some(Norm::L2) => normalize_l2(row.values_mut()),
            Some(Norm::L1) => normalize_l1(row.values_mut()),
            None => {}
        }
        row
    }
}

impl Vectorize for TfidfVectorizer {
    fn transform(&self, texts: &[&str]) -> Result<Vec<FeatureVector>, VectorizerError> {
        Ok(texts.iter().map(|text| self.transform_one(text)).collect())
    }

    fn dimension(&self) -> usize {
        self.vocabulary.len()
    }
}

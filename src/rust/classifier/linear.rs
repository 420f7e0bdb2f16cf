use ndarray::Array1;
use serde::Deserialize;

use super::{check_row_width, ClassifierError, Classify};
use crate::vectorizer::FeatureVector;

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// On-disk form of a fitted binary linear model (`coef_[0]`, `intercept_[0]`
/// and `classes_` of a scikit-learn linear classifier).
#[derive(Debug, Clone, Deserialize)]
pub struct LinearParams {
    pub coef: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

/// Binary linear decision function: `classes[1]` when `w · x + b > 0`,
/// otherwise `classes[0]`.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    weights: Array1<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LinearClassifier {
    pub fn from_params(params: LinearParams) -> Result<Self, ClassifierError> {
        if params.coef.is_empty() {
            return Err(ClassifierError::ValidationError("Coefficient vector is empty".into()));
        }
        if params.coef.iter().any(|w| !w.is_finite()) || !params.intercept.is_finite() {
            return Err(ClassifierError::ValidationError("Model contains non-finite weights".into()));
        }
        Ok(Self {
            weights: Array1::from(params.coef),
            intercept: params.intercept,
            classes: params.classes,
        })
    }

    /// Signed distance of a row from the decision boundary.
    pub fn decision_function(&self, row: &FeatureVector) -> Result<f64, ClassifierError> {
        check_row_width(row, self.input_dimension())?;
        Ok(row.dot(&self.weights) + self.intercept)
    }
}

impl Classify for LinearClassifier {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        rows.iter()
            .map(|row| {
                let score = self.decision_function(row)?;
                Ok(if score > 0.0 { self.classes[1] } else { self.classes[0] })
            })
            .collect()
    }

    fn input_dimension(&self) -> Option<usize> {
        Some(self.weights.len())
    }
}

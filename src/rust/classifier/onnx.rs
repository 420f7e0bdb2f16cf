use std::collections::HashMap;

use log::{debug, info};
use ndarray::Array2;
use ort::session::Session;
use ort::value::{Tensor, ValueType};

use super::{check_row_width, ClassifierError, Classify};
use crate::runtime::{create_session_builder, RuntimeConfig};
use crate::vectorizer::FeatureVector;

/// A classifier exported to ONNX (for example by skl2onnx).
///
/// The graph is expected to:
/// - Accept one float input of shape [batch_size, n_features]
/// - Produce the predicted labels as its first output, shape [batch_size]
///   (int64, or float32 holding whole numbers)
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Session,
    input_name: String,
    input_dimension: Option<usize>,
}

impl OnnxClassifier {
    /// Builds a session from an in-memory model.
    ///
    /// # Errors
    /// - `ModelError` if the runtime cannot be initialised or the bytes are not a valid model
    /// - `ValidationError` if the graph does not take a single 2-D float input
    pub fn from_bytes(model: &[u8], config: &RuntimeConfig) -> Result<Self, ClassifierError> {
        let session = create_session_builder(config)?
            .commit_from_memory(model)
            .map_err(|e| ClassifierError::ModelError(format!("Failed to load model: {}", e)))?;

        let input = session
            .inputs
            .first()
            .ok_or_else(|| ClassifierError::ValidationError("Model declares no inputs".into()))?;
        if session.outputs.is_empty() {
            return Err(ClassifierError::ValidationError("Model declares no outputs".into()));
        }

        let input_dimension = match &input.input_type {
            ValueType::Tensor { dimensions, .. } if dimensions.len() == 2 => {
                // Negative entries are symbolic (dynamic) axes.
                usize::try_from(dimensions[1]).ok()
            }
            other => {
                return Err(ClassifierError::ValidationError(format!(
                    "Model input {:?} must be a 2-D tensor, found {:?}",
                    input.name, other
                )))
            }
        };

        let input_name = input.name.clone();
        info!(
            "ONNX classifier loaded: input {:?}, features {}",
            input_name,
            input_dimension.map_or_else(|| "dynamic".to_string(), |d| d.to_string())
        );

        Ok(Self {
            session,
            input_name,
            input_dimension,
        })
    }

    fn dense_batch(&self, rows: &[FeatureVector]) -> Result<Array2<f32>, ClassifierError> {
        let width = match (self.input_dimension, rows.first()) {
            (Some(width), _) => width,
            (None, Some(first)) => first.dimension(),
            (None, None) => 0,
        };

        let mut batch = Array2::zeros((rows.len(), width));
        for (i, row) in rows.iter().enumerate() {
            check_row_width(row, Some(width))?;
            for (j, value) in row.iter() {
                batch[[i, j]] = value as f32;
            }
        }
        Ok(batch)
    }
}

fn float_label(value: f32) -> Result<i64, ClassifierError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ClassifierError::PredictionError(format!(
            "Model returned non-integral label {}",
            value
        )));
    }
    Ok(value as i64)
}

impl Classify for OnnxClassifier {
    fn predict(&self, rows: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let batch = self.dense_batch(rows)?;
        let batch_dyn = batch.into_dyn();
        let features = batch_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(&features)
                .map_err(|e| ClassifierError::PredictionError(format!("Failed to create input tensor: {}", e)))?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| ClassifierError::PredictionError(format!("Failed to run model: {}", e)))?;

        let labels: Vec<i64> = match outputs[0].try_extract_tensor::<i64>() {
            Ok(tensor) => tensor.iter().copied().collect(),
            Err(_) => {
                debug!("Label output is not int64, trying float32");
                outputs[0]
                    .try_extract_tensor::<f32>()
                    .map_err(|e| ClassifierError::PredictionError(format!("Failed to extract labels: {}", e)))?
                    .iter()
                    .map(|&v| float_label(v))
                    .collect::<Result<Vec<i64>, _>>()?
            }
        };

        if labels.len() != rows.len() {
            return Err(ClassifierError::PredictionError(format!(
                "Model returned {} labels for {} rows",
                labels.len(),
                rows.len()
            )));
        }
        Ok(labels)
    }

    fn input_dimension(&self) -> Option<usize> {
        self.input_dimension
    }
}

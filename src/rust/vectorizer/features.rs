use std::collections::BTreeMap;

use ndarray::Array1;

/// A single sparse row produced by a vectorizer.
///
/// Indices are strictly increasing and always below `dimension`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// An all-zero row of the given width.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a row from `index -> value` entries. Entries at or beyond
    /// `dimension` are dropped.
    pub fn from_entries(dimension: usize, entries: BTreeMap<usize, f64>) -> Self {
        let (indices, values) = entries
            .into_iter()
            .filter(|(index, _)| *index < dimension)
            .unzip();
        Self {
            dimension,
            indices,
            values,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Sparse dot product against a dense weight vector of the same width.
    pub fn dot(&self, weights: &Array1<f64>) -> f64 {
        self.iter()
            .filter_map(|(index, value)| weights.get(index).map(|w| w * value))
            .sum()
    }

    pub fn to_dense(&self) -> Array1<f64> {
        let mut dense = Array1::zeros(self.dimension);
        for (index, value) in self.iter() {
            dense[index] = value;
        }
        dense
    }
}

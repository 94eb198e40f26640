use crate::data::normalize::normalize_pixels;
use crate::error::{NetError, Result};

/// Feature vectors paired 1:1 with integer class labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<usize>,
}

impl Dataset {
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Dataset> {
        if features.len() != labels.len() {
            return Err(NetError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { features, labels })
    }

    pub fn with_capacity(n: usize) -> Dataset {
        Dataset {
            features: Vec::with_capacity(n),
            labels: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, features: Vec<f64>, label: usize) {
        self.features.push(features);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Samples in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], usize)> + '_ {
        self.features.iter()
            .map(Vec::as_slice)
            .zip(self.labels.iter().copied())
    }

    /// Scales every raw pixel from [0, 255] to [0, 1]. Call once.
    pub fn normalize(&mut self) {
        for row in &mut self.features {
            normalize_pixels(row);
        }
    }

    /// Checks every vector length and every label before the numeric core
    /// sees any of them.
    pub fn validate(&self, input_size: usize, output_size: usize) -> Result<()> {
        for (index, (features, label)) in self.iter().enumerate() {
            if features.len() != input_size {
                return Err(NetError::DimensionMismatch {
                    index,
                    expected: input_size,
                    actual: features.len(),
                });
            }
            if label >= output_size {
                tracing::debug!(index, label, "label out of range");
                return Err(NetError::LabelOutOfRange {
                    label,
                    classes: output_size,
                });
            }
        }
        Ok(())
    }
}

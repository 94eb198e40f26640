use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::sigmoid};

/// Fully-connected sigmoid layer with no bias term.
///
/// `weights` is shaped `(size, input_size)`: row `i` holds the incoming
/// weights of unit `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    pub input_size: usize,
    pub weights: Matrix,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        Layer {
            size,
            input_size,
            weights: Matrix::random(size, input_size, rng),
        }
    }

    pub fn from_weights(weights: Matrix) -> Layer {
        Layer {
            size: weights.rows,
            input_size: weights.cols,
            weights,
        }
    }

    /// `out[i] = sigmoid(Σ_j input[j]·W[i,j])`, overwriting `out` entirely.
    pub fn feed_into(&self, input: &[f64], out: &mut [f64]) {
        debug_assert_eq!(input.len(), self.input_size);
        debug_assert_eq!(out.len(), self.size);

        for (i, unit) in out.iter_mut().enumerate() {
            let mut z = 0.0;
            for (w, x) in self.weights.row(i).iter().zip(input) {
                z += x * w;
            }
            *unit = sigmoid(z);
        }
    }

    /// Pushes this layer's error signal back onto its inputs:
    /// `out[j] = Σ_i delta[i]·W[i,j]`. Reads the current weights, so call it
    /// before `apply_update`.
    pub fn back_project(&self, delta: &[f64], out: &mut [f64]) {
        debug_assert_eq!(delta.len(), self.size);
        debug_assert_eq!(out.len(), self.input_size);

        for (j, slot) in out.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (i, d) in delta.iter().enumerate() {
                sum += d * self.weights.get(i, j);
            }
            *slot = sum;
        }
    }

    /// In-place update `W[i,j] += lr·delta[i]·input[j]`.
    pub fn apply_update(&mut self, delta: &[f64], input: &[f64], lr: f64) {
        for (i, d) in delta.iter().enumerate() {
            let scale = lr * d;
            for (w, x) in self.weights.row_mut(i).iter_mut().zip(input) {
                *w += scale * x;
            }
        }
    }
}

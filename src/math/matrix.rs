use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix backed by a single flat buffer.
///
/// Element `(row, col)` lives at `data[row * cols + col]`, so the flat
/// layout is the same one any other implementation would initialize and
/// serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![0.0; rows * cols]
        }
    }

    /// Uniform samples in [-1, 1], drawn in flat index order from `rng`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        initialize_weights(&mut res.data, rng);
        res
    }

    /// Wraps an existing flat row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Matrix {
        assert_eq!(
            data.len(),
            rows * cols,
            "flat buffer of length {} cannot be shaped {}x{}",
            data.len(), rows, cols
        );
        Matrix { rows, cols, data }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Fills `weights` with independent uniform values in [-1, 1].
///
/// No fan-in scaling is applied. With a seeded `rng` the fill is fully
/// reproducible.
pub fn initialize_weights<R: Rng + ?Sized>(weights: &mut [f64], rng: &mut R) {
    for w in weights.iter_mut() {
        *w = rng.gen_range(-1.0..=1.0);
    }
}

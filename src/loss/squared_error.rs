/// Squared error against a one-hot target.
pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// `Σ_k (target[k] − output[k])²` for the one-hot target of `label`.
    ///
    /// This is a sum over output units, not a mean.
    pub fn loss(output: &[f64], label: usize) -> f64 {
        output.iter()
            .enumerate()
            .map(|(k, o)| (target_value(k, label) - o).powi(2))
            .sum()
    }
}

/// Entry `index` of the one-hot vector for `label`.
#[inline]
pub fn target_value(index: usize, label: usize) -> f64 {
    if index == label { 1.0 } else { 0.0 }
}

/// Logistic sigmoid: `1 / (1 + e^-x)`. Defined everywhere, range (0, 1).
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative written in terms of the sigmoid's *output*.
///
/// `y` must already be `sigmoid(z)`; passing the pre-activation `z` gives a
/// wrong gradient. Uses the identity `σ'(z) = σ(z)·(1 − σ(z))`.
#[inline]
pub fn sigmoid_derivative_from_output(y: f64) -> f64 {
    y * (1.0 - y)
}

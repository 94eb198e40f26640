use crate::layers::dense::Layer;

/// Plain online gradient step with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `layer` from its error signal and the input it saw.
    pub fn step(&self, layer: &mut Layer, delta: &[f64], input: &[f64]) {
        layer.apply_update(delta, input, self.learning_rate);
    }
}

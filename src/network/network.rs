use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{
    activation::activation::sigmoid_derivative_from_output,
    config::NetConfig,
    error::{NetError, Result},
    layers::dense::Layer,
    loss::squared_error::target_value,
    math::matrix::Matrix,
    optim::sgd::Sgd,
};

/// Activations of the most recent forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    pub hidden: Vec<f64>,
    pub output: Vec<f64>,
}

impl Activations {
    pub fn new(hidden_size: usize, output_size: usize) -> Self {
        Activations {
            hidden: vec![0.0; hidden_size],
            output: vec![0.0; output_size],
        }
    }

    pub fn for_network(network: &Network) -> Self {
        Activations::new(network.hidden.size, network.output.size)
    }
}

/// Per-unit error signals of the most recent backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSignals {
    pub output: Vec<f64>,
    pub hidden: Vec<f64>,
}

impl ErrorSignals {
    pub fn new(hidden_size: usize, output_size: usize) -> Self {
        ErrorSignals {
            output: vec![0.0; output_size],
            hidden: vec![0.0; hidden_size],
        }
    }

    pub fn for_network(network: &Network) -> Self {
        ErrorSignals::new(network.hidden.size, network.output.size)
    }
}

/// One hidden layer, one output layer, sigmoid everywhere, no biases.
///
/// The two weight matrices are the only state that survives between calls.
/// Training borrows the network mutably; evaluation only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub hidden: Layer,
    pub output: Layer,
}

impl Network {
    /// Draws hidden weights first, then output weights, from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &NetConfig, rng: &mut R) -> Network {
        let hidden = Layer::new(config.hidden_size, config.input_size, rng);
        let output = Layer::new(config.output_size, config.hidden_size, rng);
        Network { hidden, output }
    }

    /// Builds a network from explicit weights.
    ///
    /// # Panics
    /// Panics if `output_weights.cols != hidden_weights.rows`.
    pub fn from_weights(hidden_weights: Matrix, output_weights: Matrix) -> Network {
        assert_eq!(
            output_weights.cols, hidden_weights.rows,
            "output layer expects {} inputs but hidden layer has {} units",
            output_weights.cols, hidden_weights.rows
        );
        Network {
            hidden: Layer::from_weights(hidden_weights),
            output: Layer::from_weights(output_weights),
        }
    }

    pub fn input_size(&self) -> usize {
        self.hidden.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output.size
    }

    /// Computes both layers for `input` into `acts`.
    ///
    /// `input` must have exactly `input_size()` entries; this is checked once
    /// per dataset, not here.
    pub fn forward(&self, input: &[f64], acts: &mut Activations) {
        self.hidden.feed_into(input, &mut acts.hidden);
        self.output.feed_into(&acts.hidden, &mut acts.output);
    }

    /// Backpropagates the error for `label` and updates both layers in place.
    ///
    /// `acts` must come from `forward` on this same `input` with the current
    /// weights. The hidden error is computed from the output weights before
    /// they are updated.
    pub fn backward(
        &mut self,
        input: &[f64],
        label: usize,
        acts: &Activations,
        errors: &mut ErrorSignals,
        optimizer: &Sgd,
    ) -> Result<()> {
        if label >= self.output.size {
            return Err(NetError::LabelOutOfRange {
                label,
                classes: self.output.size,
            });
        }

        for (k, (err, &out)) in errors.output.iter_mut().zip(&acts.output).enumerate() {
            *err = (target_value(k, label) - out) * sigmoid_derivative_from_output(out);
        }

        self.output.back_project(&errors.output, &mut errors.hidden);
        for (err, &h) in errors.hidden.iter_mut().zip(&acts.hidden) {
            *err *= sigmoid_derivative_from_output(h);
        }

        optimizer.step(&mut self.output, &errors.output, &acts.hidden);
        optimizer.step(&mut self.hidden, &errors.hidden, input);
        Ok(())
    }
}

use serde::{Serialize, Deserialize};

use crate::{
    data::dataset::Dataset,
    error::{NetError, Result},
    network::network::{Activations, Network},
};

/// Outcome of running the network over a held-out set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
    /// Percentage in [0, 100].
    pub accuracy: f64,
}

/// Forward-only pass over `data`; the network is never modified.
pub fn evaluate(network: &Network, data: &Dataset) -> Result<Evaluation> {
    if data.is_empty() {
        return Err(NetError::EmptyDataset { role: "evaluation" });
    }
    data.validate(network.input_size(), network.output_size())?;

    let mut acts = Activations::for_network(network);
    let mut correct = 0usize;

    for (input, label) in data.iter() {
        network.forward(input, &mut acts);
        if argmax(&acts.output) == label {
            correct += 1;
        }
    }

    let total = data.len();
    Ok(Evaluation {
        correct,
        total,
        accuracy: correct as f64 / total as f64 * 100.0,
    })
}

/// Index of the largest element; ties go to the lowest index.
///
/// Scans left to right and only moves on a strictly greater value. Returns 0
/// for an empty slice.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > v[best] {
            best = i;
        }
    }
    best
}

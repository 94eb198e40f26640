use std::time::Instant;

use crate::{
    config::NetConfig,
    data::dataset::Dataset,
    error::{NetError, Result},
    loss::squared_error::SquaredErrorLoss,
    network::network::{Activations, ErrorSignals, Network},
    optim::sgd::Sgd,
    report::Reporter,
    train::epoch_stats::EpochStats,
};

/// Trains `network` on `data` for exactly `config.epochs` epochs.
///
/// Samples are visited in dataset order every epoch, with one forward pass,
/// one loss evaluation and one backward pass (weight update) per sample.
/// The whole dataset is validated before the first update, so a bad label or
/// short vector never leaves the weights half-trained.
///
/// Returns the statistics of every epoch, which are also sent to `reporter`.
pub fn train_network<R: Reporter + ?Sized>(
    network: &mut Network,
    data: &Dataset,
    config: &NetConfig,
    reporter: &mut R,
) -> Result<Vec<EpochStats>> {
    if data.is_empty() {
        return Err(NetError::EmptyDataset { role: "training" });
    }
    data.validate(network.input_size(), network.output_size())?;

    let optimizer = Sgd::new(config.learning_rate);
    let mut acts = Activations::for_network(network);
    let mut errors = ErrorSignals::for_network(network);
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let mean_loss = run_one_epoch(network, data, &optimizer, &mut acts, &mut errors)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            mean_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        reporter.epoch(&stats);
        history.push(stats);
    }

    Ok(history)
}

/// One pass of online gradient descent. Returns the mean per-sample loss.
fn run_one_epoch(
    network: &mut Network,
    data: &Dataset,
    optimizer: &Sgd,
    acts: &mut Activations,
    errors: &mut ErrorSignals,
) -> Result<f64> {
    let mut total_loss = 0.0;

    for (input, label) in data.iter() {
        network.forward(input, acts);
        total_loss += SquaredErrorLoss::loss(&acts.output, label);
        network.backward(input, label, acts, errors, optimizer)?;
    }

    Ok(total_loss / data.len() as f64)
}

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    config::NetConfig,
    data::{csv::load_csv, dataset::Dataset, preview::render_sample},
    error::Result,
    network::network::Network,
    report::{timed, Reporter},
    train::{epoch_stats::EpochStats, evaluate::{evaluate, Evaluation}, trainer::train_network},
};

/// Where the two CSV sources live.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub train: PathBuf,
    pub test: PathBuf,
}

/// Everything a finished run produces.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub epochs: Vec<EpochStats>,
    pub evaluation: Evaluation,
    pub network: Network,
}

/// Loads `count` samples from `path`, logs the first `preview` of them raw,
/// then normalizes.
pub fn load_and_normalize(
    path: &Path,
    count: usize,
    input_size: usize,
    preview: usize,
) -> Result<Dataset> {
    let mut data = load_csv(path, count, input_size)?;
    for (features, label) in data.iter().take(preview) {
        let width = (input_size as f64).sqrt() as usize;
        tracing::debug!("\n{}", render_sample(label, features, width));
    }
    data.normalize();
    Ok(data)
}

/// Full run: load + normalize both sets, initialize, train, evaluate.
///
/// Each of the three phases is reported as a timing (`load_and_norm`,
/// `train`, `test`).
pub fn run<R: Reporter + ?Sized>(
    paths: &DataPaths,
    config: &NetConfig,
    preview: usize,
    reporter: &mut R,
) -> Result<RunSummary> {
    config.validate()?;

    let (train, test) = timed(reporter, "load_and_norm", |_| -> Result<(Dataset, Dataset)> {
        let test = load_and_normalize(&paths.test, config.test_size, config.input_size, preview)?;
        let train = load_and_normalize(&paths.train, config.train_size, config.input_size, preview)?;
        Ok((train, test))
    })?;
    tracing::info!(train = train.len(), test = test.len(), "datasets loaded");

    train_and_evaluate(&train, &test, config, reporter)
}

/// Seeds the weights from `config.seed`, trains on `train` and scores on `test`.
pub fn train_and_evaluate<R: Reporter + ?Sized>(
    train: &Dataset,
    test: &Dataset,
    config: &NetConfig,
    reporter: &mut R,
) -> Result<RunSummary> {
    config.validate()?;
    train.validate(config.input_size, config.output_size)?;
    test.validate(config.input_size, config.output_size)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut network = Network::new(config, &mut rng);

    tracing::info!(
        input = config.input_size,
        hidden = config.hidden_size,
        output = config.output_size,
        learning_rate = config.learning_rate,
        epochs = config.epochs,
        "Training"
    );
    let epochs = timed(reporter, "train", |r| train_network(&mut network, train, config, r))?;

    let evaluation = timed(reporter, "test", |r| -> Result<Evaluation> {
        let eval = evaluate(&network, test)?;
        r.accuracy(&eval);
        Ok(eval)
    })?;

    Ok(RunSummary { epochs, evaluation, network })
}

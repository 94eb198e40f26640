//! Command-line front end: trains the classifier on an MNIST-style CSV and
//! reports held-out accuracy.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sigmanet::{
    pipeline::{self, DataPaths},
    LogReporter, NetConfig,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sigmanet")]
#[command(about = "Train a one-hidden-layer sigmoid network with online backpropagation", long_about = None)]
struct Cli {
    /// Training CSV (label followed by pixel values on each line)
    #[arg(long, default_value = "mnist_train.csv")]
    train: PathBuf,

    /// Held-out CSV in the same format
    #[arg(long, default_value = "mnist_test.csv")]
    test: PathBuf,

    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    epochs: Option<usize>,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(long)]
    hidden_size: Option<usize>,

    /// Number of classes
    #[arg(long)]
    output_size: Option<usize>,

    /// Training rows to read
    #[arg(long)]
    train_size: Option<usize>,

    /// Held-out rows to read
    #[arg(long)]
    test_size: Option<usize>,

    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Print the first N raw samples of each set (needs debug logging)
    #[arg(long, default_value = "0")]
    preview: usize,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Level {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl Cli {
    fn net_config(&self) -> Result<NetConfig> {
        let mut config = match &self.config {
            Some(path) => NetConfig::load_json(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => NetConfig::default(),
        };

        if let Some(v) = self.epochs { config.epochs = v; }
        if let Some(v) = self.learning_rate { config.learning_rate = v; }
        if let Some(v) = self.hidden_size { config.hidden_size = v; }
        if let Some(v) = self.output_size { config.output_size = v; }
        if let Some(v) = self.train_size { config.train_size = v; }
        if let Some(v) = self.test_size { config.test_size = v; }
        if let Some(v) = self.seed { config.seed = v; }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting tracing subscriber")?;

    let config = cli.net_config()?;
    let paths = DataPaths {
        train: cli.train.clone(),
        test: cli.test.clone(),
    };

    let summary = pipeline::run(&paths, &config, cli.preview, &mut LogReporter)
        .context("training run failed")?;

    info!(
        correct = summary.evaluation.correct,
        total = summary.evaluation.total,
        "done"
    );
    Ok(())
}

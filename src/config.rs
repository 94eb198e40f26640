use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Fixed sizes and hyperparameters for one run.
///
/// Every component receives these by reference; nothing in the library
/// hard-codes a layer width or learning rate.
///
/// ```json
/// {
///   "hidden_size": 64,
///   "epochs": 3,
///   "seed": 7
/// }
/// ```
///
/// Omitted fields fall back to `NetConfig::default()`, the reference MNIST run.
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetConfig {
    /// Length of every feature vector (28×28 pixels for MNIST).
    pub input_size: usize,
    pub hidden_size: usize,
    /// Number of classes; labels must lie in `0..output_size`.
    pub output_size: usize,
    /// Number of training rows to read.
    pub train_size: usize,
    /// Number of held-out rows to read.
    pub test_size: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Seed for weight initialization; the same seed gives the same run.
    pub seed: u64,
}

impl Default for NetConfig {
    fn default() -> Self {
        NetConfig {
            input_size: 784,
            hidden_size: 128,
            output_size: 10,
            train_size: 60_000,
            test_size: 10_000,
            learning_rate: 0.3,
            epochs: 10,
            seed: 1,
        }
    }
}

impl NetConfig {
    /// Reads a JSON configuration and validates it.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetConfig> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => NetError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => NetError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let reader = std::io::BufReader::new(file);
        let config: NetConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the numeric core cannot run with.
    pub fn validate(&self) -> Result<()> {
        let widths = [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ];
        for (name, value) in widths {
            if value == 0 {
                return Err(NetError::InvalidConfig(format!("{} must be at least 1", name)));
            }
        }
        if self.epochs == 0 {
            return Err(NetError::InvalidConfig("epochs must be at least 1".into()));
        }
        // Zero is allowed: it turns training into a no-op.
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(NetError::InvalidConfig(format!(
                "learning_rate must be finite and non-negative, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

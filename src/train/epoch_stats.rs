use serde::{Serialize, Deserialize};

/// Statistics for one completed training epoch.
///
/// The training loop hands one of these to its `Reporter` at the end of every
/// epoch and also returns the full list to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Summed squared error per sample, averaged over the epoch.
    pub mean_loss: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

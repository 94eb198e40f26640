//! Progress reporting and timing.
//!
//! Training and evaluation push their results into a `Reporter` instead of
//! printing directly. `LogReporter` turns them into `tracing` events;
//! `RecordingReporter` keeps them for later inspection.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::train::{epoch_stats::EpochStats, evaluate::Evaluation};

/// Sink for per-epoch losses, the final accuracy and named timings.
pub trait Reporter {
    fn epoch(&mut self, stats: &EpochStats);
    fn accuracy(&mut self, eval: &Evaluation);
    fn timing(&mut self, label: &str, elapsed: Duration);
}

/// Discards everything.
impl Reporter for () {
    fn epoch(&mut self, _stats: &EpochStats) {}
    fn accuracy(&mut self, _eval: &Evaluation) {}
    fn timing(&mut self, _label: &str, _elapsed: Duration) {}
}

/// Reports through `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn epoch(&mut self, stats: &EpochStats) {
        tracing::info!(
            epoch = stats.epoch,
            total_epochs = stats.total_epochs,
            elapsed_ms = stats.elapsed_ms,
            "Epoch {}, Loss: {:.6}",
            stats.epoch,
            stats.mean_loss
        );
    }

    fn accuracy(&mut self, eval: &Evaluation) {
        tracing::info!(
            correct = eval.correct,
            total = eval.total,
            "Test Accuracy: {:.2}%",
            eval.accuracy
        );
    }

    fn timing(&mut self, label: &str, elapsed: Duration) {
        tracing::info!("{} took {} ms", label, elapsed.as_millis());
    }
}

/// One event seen by a `RecordingReporter`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Report {
    Epoch(EpochStats),
    Accuracy(Evaluation),
    Timing { label: String, elapsed_ms: u64 },
}

/// Keeps every event in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<Report>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch_losses(&self) -> Vec<f64> {
        self.events.iter()
            .filter_map(|e| match e {
                Report::Epoch(stats) => Some(stats.mean_loss),
                _ => None,
            })
            .collect()
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.events.iter().rev().find_map(|e| match e {
            Report::Accuracy(eval) => Some(eval.accuracy),
            _ => None,
        })
    }

    pub fn timing_labels(&self) -> Vec<&str> {
        self.events.iter()
            .filter_map(|e| match e {
                Report::Timing { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn epoch(&mut self, stats: &EpochStats) {
        self.events.push(Report::Epoch(stats.clone()));
    }

    fn accuracy(&mut self, eval: &Evaluation) {
        self.events.push(Report::Accuracy(eval.clone()));
    }

    fn timing(&mut self, label: &str, elapsed: Duration) {
        self.events.push(Report::Timing {
            label: label.to_string(),
            elapsed_ms: elapsed.as_millis() as u64,
        });
    }
}

/// Runs `f`, then reports how long it took under `label`.
///
/// `f` receives the reporter so the timed work can report through it too.
pub fn timed<R, T, F>(reporter: &mut R, label: &str, f: F) -> T
where
    R: Reporter + ?Sized,
    F: FnOnce(&mut R) -> T,
{
    let start = Instant::now();
    let out = f(reporter);
    reporter.timing(label, start.elapsed());
    out
}

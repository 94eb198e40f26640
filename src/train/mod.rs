pub mod trainer;
pub mod epoch_stats;
pub mod evaluate;

pub use trainer::train_network;
pub use epoch_stats::EpochStats;
pub use evaluate::{argmax, evaluate, Evaluation};

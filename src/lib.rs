pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod config;
pub mod error;
pub mod report;
pub mod pipeline;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{sigmoid, sigmoid_derivative_from_output};
pub use layers::dense::Layer;
pub use network::network::{Activations, ErrorSignals, Network};
pub use loss::squared_error::SquaredErrorLoss;
pub use optim::sgd::Sgd;
pub use train::{train_network, evaluate, argmax, EpochStats, Evaluation};
pub use data::{Dataset, load_csv};
pub use config::NetConfig;
pub use error::{NetError, Result};
pub use report::{Reporter, LogReporter, RecordingReporter};

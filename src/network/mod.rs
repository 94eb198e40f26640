pub mod network;

pub use network::{Activations, ErrorSignals, Network};

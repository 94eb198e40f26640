pub mod matrix;

pub use matrix::{Matrix, initialize_weights};

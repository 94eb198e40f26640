pub mod csv;
pub mod dataset;
pub mod normalize;
pub mod preview;

pub use csv::load_csv;
pub use dataset::Dataset;
pub use normalize::normalize_pixels;
pub use preview::render_sample;

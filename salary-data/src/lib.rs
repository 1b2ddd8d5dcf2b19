//! Loaders that turn files into engine inputs: regime tables from TOML and
//! batches of salary inputs from CSV.

pub mod batch;
pub mod regime_file;

pub use batch::{BatchLoadError, BatchLoader};
pub use regime_file::{RegimeFileError, RegimeFileLoader};

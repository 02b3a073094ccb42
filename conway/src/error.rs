// error.rs - Error type shared by the simulation core

use thiserror::Error;

/// Everything the core can refuse to do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Toroidal wrap needs a positive modulus on both axes.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// More cells than a single allocation can address.
    #[error("a {rows}x{cols} grid is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("pattern index {index} is out of range (catalog has {len} entries)")]
    PatternIndexOutOfRange { index: usize, len: usize },

    #[error("seeding probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

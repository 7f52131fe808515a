//! Error types for terramesh

use thiserror::Error;

/// Main error type for terramesh operations.
///
/// Only hard failures live here: an unreadable feed or data the loader
/// cannot make sense of at all. Recoverable shapes (empty cloud, too few
/// points, fully filtered-out triangulation) are reported as outcome
/// values by the pipeline so a caller can always see how far a run got.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for terramesh operations
pub type Result<T> = std::result::Result<T, Error>;

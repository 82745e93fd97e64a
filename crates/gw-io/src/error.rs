//! Error types for gw-io.

use thiserror::Error;

use gw_net::NetError;
use gw_plan::PlanError;

/// Errors that can occur while reading or writing the text formats.
///
/// `Parse` carries the 1-based line number of the offending line; the
/// remaining variants wrap the failures of the layers below.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid network: {0}")]
    Net(#[from] NetError),

    #[error("invalid plan: {0}")]
    Plan(#[from] PlanError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;

//! Errors raised by the glue around the reconstructor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported SMPTE time division: {0}")]
    UnsupportedDivision(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for bacpoint-model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointError {
    #[error("Priority must be a number between 1 and 16 (got {0})")]
    InvalidPriority(u8),

    #[error("Invalid value for point write: {0}")]
    InvalidValue(String),

    #[error("Operation not supported by this point type: {0}")]
    Unsupported(&'static str),

    #[error("State index out of range: {index} (state table has {len} entries)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Device(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PointError>;

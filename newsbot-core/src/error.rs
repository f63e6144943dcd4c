//! Error types for a digest run

use thiserror::Error;

/// Run-wide error type
///
/// Only configuration and delivery failures are fatal; everything else
/// degrades the batch instead of surfacing here.
#[derive(Error, Debug)]
pub enum NewsbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl NewsbotError {
    pub fn config(msg: impl Into<String>) -> Self {
        NewsbotError::Config(msg.into())
    }

    pub fn delivery(msg: impl Into<String>) -> Self {
        NewsbotError::Delivery(msg.into())
    }
}

/// Result type alias for digest operations
pub type NewsbotResult<T> = Result<T, NewsbotError>;

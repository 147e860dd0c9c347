use std::result::Result as StdResult;

use thiserror::Error;

/// Error type that captures calculator precondition failures.
///
/// Every failure is synchronous and signals a caller-side defect; nothing
/// here is transient or retryable, and no partial result is ever returned
/// alongside an error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = StdResult<T, EngineError>;

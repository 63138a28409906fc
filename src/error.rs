// src/error.rs

use std::fmt;

/// Core Error Enum.
/// The domain surface is narrow: every failure a caller can trigger here is
/// malformed input (bad creation payload, degenerate quiz, broken answer map).
/// Anything transport- or storage-shaped is the surrounding layers' problem.
#[derive(Debug)]
pub enum AppError {
    // Maps to 400 Bad Request at the (external) request layer
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `validator::ValidationErrors` into `AppError::InvalidInput`.
/// Allows using `?` operator on `payload.validate()`.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

use thiserror::Error;

use crate::cashbook::LoadError;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate level error
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load cash book: {0}")]
    Load(#[from] LoadError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid month key '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),
}

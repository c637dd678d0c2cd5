use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Index {index} out of range for history of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid scale factor: {0}")]
    InvalidScale(String),

    #[error("Driver rejected command: {0}")]
    DriverRejected(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No driver attached")]
    NoDriver,
}

pub type Result<T> = std::result::Result<T, DomainError>;

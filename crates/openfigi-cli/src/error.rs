use openfigi_core::{FigiError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Figi(#[from] FigiError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Figi(FigiError::Validation(_)) => 2,
            Self::Figi(FigiError::Status { .. }) => 3,
            Self::Figi(_) => 10,
            Self::Serialization(_) => 10,
            Self::Io(_) => 10,
        }
    }
}

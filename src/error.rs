use std::path::PathBuf;
use thiserror::Error;

use crate::phone::PhoneError;

#[derive(Error, Debug)]
pub enum ReconError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(#[from] PhoneError),

    #[error("Authorization not confirmed")]
    AuthorizationDeclined,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl ReconError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<anyhow::Error> for ReconError {
    fn from(error: anyhow::Error) -> Self {
        ReconError::UnexpectedError(error.to_string())
    }
}

pub type ReconResult<T> = std::result::Result<T, ReconError>;

use thiserror::Error;

use crate::errors::domain::RosterError;

/// Application-level failures. Anything here ends the program.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        AppError::config(format!("invalid players: {err}"))
    }
}

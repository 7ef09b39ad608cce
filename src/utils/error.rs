use std::io;

use crate::config::ConfigError;

/// Crate-wide error type
///
/// Read failures and a missing notifier binary are recovered where they
/// happen and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to write to stdout: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Stable code for structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG001",
            AppError::Output(_) => "OUTPUT001",
        }
    }
}

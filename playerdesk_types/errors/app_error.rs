use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Player {0} not found")]
    PlayerNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

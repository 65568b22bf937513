use thiserror::Error;

pub mod api_error;
pub mod app_error;

pub use api_error::ApiError;
pub use app_error::AppError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    /// True when the error means the requested player is not in the remote collection.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::App(AppError::PlayerNotFound(_)))
    }
}

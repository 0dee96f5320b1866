use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualboardError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("not authenticated")]
    Unauthorized,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QualboardError>;

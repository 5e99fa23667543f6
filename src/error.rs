use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No items detected on the receipt")]
    EmptyExtraction,
}

pub type Result<T> = std::result::Result<T, SplitError>;

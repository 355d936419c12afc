use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptPayError {
    #[error("Amount cannot be a negative value")]
    NegativeAmount,
    #[error("Accept only phone or citizen number")]
    TargetMismatch,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptPayError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    /// The submitted receipt failed a field-format or structural check.
    #[error("{0}")]
    InvalidReceipt(String),
    /// No scored receipt is stored under the requested identifier.
    #[error("receipt not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;

use crate::error::ReceiptError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub const INVALID_RECEIPT_DATA: &str = "Invalid receipt data";
pub const RECEIPT_NOT_FOUND: &str = "Receipt not found";
pub const INTERNAL_FAILURE: &str = "An error occurred while processing the receipt";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ReceiptError {
    /// Returns the HTTP status code for this error.
    ///
    /// - InvalidReceipt: 400 Bad Request
    /// - NotFound: 404 Not Found
    /// - everything else: 500 Internal Server Error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::IoError(_) | Self::JsonError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::InvalidReceipt(reason) => reason,
            Self::NotFound(_) => RECEIPT_NOT_FOUND.to_string(),
            other => {
                error!(error = %other, "request failed");
                INTERNAL_FAILURE.to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

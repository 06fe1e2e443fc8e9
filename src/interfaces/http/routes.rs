use super::error::INVALID_RECEIPT_DATA;
use crate::application::processor::ReceiptProcessor;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::{ReceiptError, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    processor: Arc<ReceiptProcessor>,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(receipt_points))
        .with_state(state)
}

/// Turns a request body into a receipt.
///
/// An absent body, anything other than a non-empty JSON object, and fields of
/// the wrong JSON type are all reported as invalid receipt data.
fn decode_receipt(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Receipt> {
    let invalid = || ReceiptError::InvalidReceipt(INVALID_RECEIPT_DATA.to_string());
    let Ok(Json(value)) = payload else {
        return Err(invalid());
    };
    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(invalid()),
    }
    serde_json::from_value(value).map_err(|_| invalid())
}

/// POST /receipts/process
async fn process_receipt(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProcessResponse>> {
    let receipt = decode_receipt(payload)?;
    let id = state.processor.process(receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points
async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = state.processor.points(&ReceiptId::from(id)).await?;
    Ok(Json(PointsResponse { points }))
}

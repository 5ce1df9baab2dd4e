//! Receipt submission and points lookup handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::Json;
use rewards_core::points::score_breakdown;
use rewards_core::{validate_receipt, Receipt};
use rewards_store::ReceiptId;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::AppState;

/// Body of a successful submission.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: ReceiptId,
}

/// Body of a successful points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// `POST /receipts/process`
///
/// Decodes, validates and stores a receipt, returning its id.
///
/// The body is decoded as JSON whatever its content type.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<IdResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!(error = %rejection, "Receipt body rejected");
        ApiError::from(rejection)
    })?;

    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Receipt data decoding failed");
        ApiError::bad_request("Receipt data decoding failed")
    })?;

    let verdict = validate_receipt(&receipt);
    if let Err(e) = verdict.into_result() {
        warn!(
            retailer = %receipt.retailer,
            missing_fields = verdict.missing_fields,
            fields_valid = verdict.fields_valid,
            "Receipt rejected"
        );
        return Err(e.into());
    }

    let stored = state.receipts.insert(receipt).await.map_err(|e| {
        warn!(error = %e, "Receipt not stored");
        ApiError::from(e)
    })?;

    info!(
        id = %stored.id,
        retailer = %stored.receipt.retailer,
        items = stored.receipt.items.len(),
        "Receipt accepted"
    );

    Ok(Json(IdResponse { id: stored.id }))
}

/// `GET /receipts/{id}/points`
///
/// Scores a stored receipt. Points are computed on every lookup.
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let stored = state.receipts.get(&ReceiptId::new(id)).await?;

    let breakdown = score_breakdown(&stored.receipt)?;
    for c in &breakdown.contributions {
        debug!(id = %stored.id, rule = c.rule.name(), points = c.points, "Points rule");
    }

    let points = breakdown.total;
    info!(id = %stored.id, points, "Points computed");
    Ok(Json(PointsResponse { points }))
}

/// Fallback for unsupported methods on the receipt routes.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::not_found("The request resource was not found")
}

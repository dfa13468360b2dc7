//! Audit-event ingress handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::Value;

use guardrail_core::error::AppError;
use guardrail_core::events::AuditEnvelope;
use guardrail_core::types::RevocationResult;
use guardrail_service::InvocationReport;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/events
///
/// Status codes drive the event bus: `200` done, `503` redeliver,
/// `422` permanent failure (not redelivered, already logged at error).
pub async fn ingest(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<InvocationReport>>), ApiError> {
    let Json(value) =
        body.map_err(|e| AppError::validation(format!("Invalid event body: {}", e.body_text())))?;

    let envelope = AuditEnvelope::from_value(value);
    let report = state.guardrail.handle(&envelope).await;

    let response = match &report.result {
        RevocationResult::Success => (StatusCode::OK, Json(ApiResponse::ok(report))),
        RevocationResult::RetryableFailure { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::failed(report)),
        ),
        RevocationResult::PermanentFailure { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::failed(report)),
        ),
    };
    Ok(response)
}

use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use shared::models::{RefundDecision, RefundRequest};
use shared::response::ApiStatus;

use super::ack;
use crate::error::{MockError, MockResult};
use crate::state::MockState;

pub(super) fn routes() -> Router<MockState> {
    Router::new()
        .route("/refunds", get(list))
        .route("/refunds/{id}", patch(decide))
}

async fn list(State(state): State<MockState>) -> Json<Vec<RefundRequest>> {
    Json(state.read().refunds.clone())
}

async fn decide(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(decision): Json<RefundDecision>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let refund = store
        .refunds
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| MockError::not_found("Refund request", &id))?;
    refund.status = decision.status;
    tracing::info!(refund = %id, status = %decision.status, "refund decided");
    Ok(ack("Refund updated"))
}

//! Order routes
//!
//! Shapes: `GET /orders` is a bare array, the filtered listing carries a
//! `pagination` object, single orders come as `{ success, order }`.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use shared::listing::{DEFAULT_PAGE_SIZE, paginate};
use shared::models::{
    AdminNote, AdminNoteRequest, CancelOrderRequest, Order, OrderStatus, PaymentStatus,
    ProofStatus, StatusUpdateRequest, VerificationDecision, VerifyPaymentRequest,
};
use shared::order::{check_cancel, check_status_update, check_verification};
use shared::response::ApiStatus;
use shared::{ListFilter, Listable};

use super::ack;
use crate::auth::Claims;
use crate::error::{MockError, MockResult};
use crate::state::{MockState, Store};

pub(super) fn routes() -> Router<MockState> {
    Router::new()
        .route("/orders", get(list))
        .route("/orders/admin/filtered", get(filtered))
        .route("/orders/{id}", get(get_one))
        .route("/orders/{id}/status", put(update_status))
        .route("/orders/{id}/cancel", put(cancel))
        .route("/orders/{id}/notes", post(add_note))
        .route("/orders/{id}/payment-proof", get(payment_proof))
        .route("/orders/{id}/verify-payment", put(verify_payment))
}

/// Look up an order the caller may see.
fn visible_order<'a>(store: &'a mut Store, id: &str) -> MockResult<&'a mut Order> {
    if store.restricted_orders.contains(id) {
        return Err(MockError::Forbidden("Access denied".into()));
    }
    store
        .order_mut(id)
        .ok_or_else(|| MockError::not_found("Order", id))
}

async fn list(State(state): State<MockState>) -> Json<Vec<Order>> {
    let store = state.read();
    Json(
        store
            .orders
            .iter()
            .filter(|o| !store.restricted_orders.contains(&o.id))
            .cloned()
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterParams {
    page: Option<u32>,
    limit: Option<u32>,
    status: Option<String>,
    payment_status: Option<String>,
    #[serde(default)]
    search: String,
}

async fn filtered(
    State(state): State<MockState>,
    Query(params): Query<FilterParams>,
) -> Json<Value> {
    let filter = ListFilter {
        search: params.search,
        category: None,
        status: params.status,
        payment_status: params.payment_status,
    };
    let store = state.read();
    let mut matching: Vec<Order> = store
        .orders
        .iter()
        .filter(|o| !store.restricted_orders.contains(&o.id) && o.matches(&filter))
        .cloned()
        .collect();
    // newest first
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let page = paginate(
        &matching,
        params.page.unwrap_or(1),
        params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    Json(json!({
        "success": true,
        "orders": page.items,
        "pagination": {
            "page": page.page,
            "limit": page.per_page,
            "total": page.total,
            "totalPages": page.total_pages,
        }
    }))
}

async fn get_one(State(state): State<MockState>, Path(id): Path<String>) -> MockResult<Json<Value>> {
    let mut store = state.write();
    let order = visible_order(&mut store, &id)?;
    Ok(Json(json!({ "success": true, "order": order })))
}

async fn update_status(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let order = visible_order(&mut store, &id)?;
    check_status_update(order.status, req.status)?;

    order.status = req.status;
    if let Some(tracking) = req.tracking_number.filter(|t| !t.trim().is_empty()) {
        order.tracking_number = Some(tracking);
    }
    tracing::info!(order = %id, status = %req.status, "order status updated");
    Ok(ack("Order status updated"))
}

async fn cancel(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(req): Json<CancelOrderRequest>,
) -> MockResult<Json<ApiStatus>> {
    if req.reason.trim().is_empty() {
        return Err(MockError::Validation("Cancellation reason is required".into()));
    }
    let mut store = state.write();
    let order = visible_order(&mut store, &id)?;
    check_cancel(order.status)?;

    order.status = OrderStatus::Cancelled;
    order.cancellation_reason = Some(req.reason);
    tracing::info!(order = %id, "order cancelled");
    Ok(ack("Order cancelled"))
}

async fn add_note(
    State(state): State<MockState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<AdminNoteRequest>,
) -> MockResult<Json<ApiStatus>> {
    if req.note.trim().is_empty() {
        return Err(MockError::Validation("Note is required".into()));
    }
    let mut store = state.write();
    let order = visible_order(&mut store, &id)?;
    order.admin_notes.push(AdminNote {
        note: req.note,
        created_at: Some(Utc::now().to_rfc3339()),
        added_by: Some(claims.email),
    });
    Ok(ack("Note added"))
}

async fn payment_proof(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<Value>> {
    let mut store = state.write();
    visible_order(&mut store, &id)?;
    let proof = store
        .proofs
        .get(&id)
        .ok_or_else(|| MockError::NotFound("No payment proof submitted".into()))?;
    Ok(Json(json!({ "success": true, "paymentProof": proof })))
}

async fn verify_payment(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(req): Json<VerifyPaymentRequest>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    visible_order(&mut store, &id)?;
    check_verification(store.proofs.get(&id))?;

    if let Some(proof) = store.proofs.get_mut(&id) {
        proof.status = ProofStatus::from(req.status);
        proof.admin_notes = req.admin_notes.filter(|n| !n.trim().is_empty());
        proof.verified_at = Some(Utc::now().to_rfc3339());
    }
    if let Some(order) = store.order_mut(&id) {
        order.payment_status = match req.status {
            VerificationDecision::Verified => PaymentStatus::Paid,
            VerificationDecision::Rejected => PaymentStatus::Failed,
        };
    }
    tracing::info!(order = %id, decision = %req.status, "payment reviewed");
    Ok(ack("Payment reviewed"))
}

//! Coupons: bare arrays, full-record updates

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::models::{Coupon, CouponDraft};
use shared::response::ApiStatus;

use super::ack;
use crate::error::{MockError, MockResult};
use crate::state::MockState;

pub(super) fn routes() -> Router<MockState> {
    Router::new()
        .route("/coupons", get(list).post(create))
        .route("/coupons/{id}", put(update).delete(delete))
}

fn check(code: &str, discount: f64) -> MockResult<()> {
    if code.trim().is_empty() {
        return Err(MockError::Validation("Coupon code is required".into()));
    }
    if !(discount > 0.0 && discount <= 100.0) {
        return Err(MockError::Validation("Discount must be between 0 and 100".into()));
    }
    Ok(())
}

async fn list(State(state): State<MockState>) -> Json<Vec<Coupon>> {
    Json(state.read().coupons.clone())
}

/// Ids are numeric strings, like the original JSON store.
async fn create(
    State(state): State<MockState>,
    Json(draft): Json<CouponDraft>,
) -> MockResult<Json<ApiStatus>> {
    check(&draft.code, draft.discount)?;
    let mut store = state.write();
    if store.coupons.iter().any(|c| c.code.eq_ignore_ascii_case(&draft.code)) {
        return Err(MockError::Validation("Coupon code already exists".into()));
    }
    let next = store
        .coupons
        .iter()
        .filter_map(|c| c.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    store.coupons.push(draft.into_coupon(next.to_string()));
    Ok(ack("Coupon created"))
}

async fn update(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(coupon): Json<Coupon>,
) -> MockResult<Json<ApiStatus>> {
    check(&coupon.code, coupon.discount)?;
    let mut store = state.write();
    let slot = store
        .coupons
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| MockError::not_found("Coupon", &id))?;
    *slot = Coupon { id, ..coupon };
    Ok(ack("Coupon updated"))
}

async fn delete(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let before = store.coupons.len();
    store.coupons.retain(|c| c.id != id);
    if store.coupons.len() == before {
        return Err(MockError::not_found("Coupon", &id));
    }
    Ok(ack("Coupon deleted"))
}

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::models::DeliveryCosts;

use crate::error::{MockError, MockResult};
use crate::state::MockState;

pub(super) fn routes() -> Router<MockState> {
    Router::new().route("/admin/delivery-costs", get(get_costs).post(set_costs))
}

async fn get_costs(State(state): State<MockState>) -> Json<Value> {
    Json(json!({ "success": true, "deliveryCosts": state.read().delivery_costs }))
}

async fn set_costs(
    State(state): State<MockState>,
    Json(costs): Json<DeliveryCosts>,
) -> MockResult<Json<Value>> {
    if costs.dhaka_inside < 0.0 || costs.dhaka_outside < 0.0 {
        return Err(MockError::Validation("Delivery costs must not be negative".into()));
    }
    state.write().delivery_costs = costs;
    Ok(Json(json!({
        "success": true,
        "message": "Delivery costs updated",
        "deliveryCosts": costs,
    })))
}

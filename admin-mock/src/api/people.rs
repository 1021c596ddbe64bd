//! Customers and contact messages

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::models::{Customer, CustomerDraft, Message};
use shared::response::ApiStatus;

use super::ack;
use crate::error::{MockError, MockResult};
use crate::state::MockState;

pub(super) fn routes() -> Router<MockState> {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/{id}", put(update_customer).delete(delete_customer))
        .route("/messages", get(list_messages))
        .route("/messages/{id}", put(update_message).delete(delete_message))
}

async fn list_customers(State(state): State<MockState>) -> Json<Vec<Customer>> {
    Json(state.read().customers.clone())
}

/// Returns the stored record, bare.
async fn update_customer(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(draft): Json<CustomerDraft>,
) -> MockResult<Json<Customer>> {
    if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
        return Err(MockError::Validation("Name and email are required".into()));
    }
    let mut store = state.write();
    let customer = store
        .customers
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| MockError::not_found("Customer", &id))?;
    customer.name = draft.name;
    customer.email = draft.email;
    customer.joined = draft.joined;
    Ok(Json(customer.clone()))
}

async fn delete_customer(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let before = store.customers.len();
    store.customers.retain(|c| c.id != id);
    if store.customers.len() == before {
        return Err(MockError::not_found("Customer", &id));
    }
    Ok(ack("Customer deleted"))
}

async fn list_messages(State(state): State<MockState>) -> Json<Vec<Message>> {
    Json(state.read().messages.clone())
}

async fn update_message(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(message): Json<Message>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let slot = store
        .messages
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| MockError::not_found("Message", &id))?;
    *slot = Message { id, ..message };
    Ok(ack("Message updated"))
}

async fn delete_message(
    State(state): State<MockState>,
    Path(id): Path<String>,
) -> MockResult<Json<ApiStatus>> {
    let mut store = state.write();
    let before = store.messages.len();
    store.messages.retain(|m| m.id != id);
    if store.messages.len() == before {
        return Err(MockError::not_found("Message", &id));
    }
    Ok(ack("Message deleted"))
}

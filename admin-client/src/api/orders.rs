use serde_json::Value;
use shared::envelope;
use shared::listing::{OrderQuery, Page};
use shared::models::{
    AdminNoteRequest, CancelOrderRequest, Order, PaymentProof, StatusUpdateRequest,
    VerifyPaymentRequest,
};

use super::{expect_ack, segment};
use crate::ClientResult;
use crate::http::HttpClient;

pub struct OrdersApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> OrdersApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /orders (unfiltered, used by reports)
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        let value: Value = self.http.get("/orders").await?;
        Ok(envelope::list_from_value(value, "orders")?)
    }

    /// GET /orders/admin/filtered
    pub async fn list_filtered(&self, query: &OrderQuery) -> ClientResult<Page<Order>> {
        let path = format!("/orders/admin/filtered?{}", query.to_query_string());
        let value: Value = self.http.get(&path).await?;
        Ok(envelope::page_from_value(value, "orders", query.page, query.limit)?)
    }

    /// GET /orders/{id}
    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        let value: Value = self.http.get(&format!("/orders/{}", segment(id))).await?;
        Ok(envelope::entity_from_value(value, "order")?)
    }

    /// PUT /orders/{id}/status
    pub async fn update_status(&self, id: &str, request: &StatusUpdateRequest) -> ClientResult<()> {
        let value: Value = self
            .http
            .put(&format!("/orders/{}/status", segment(id)), request)
            .await?;
        expect_ack(value)
    }

    /// PUT /orders/{id}/cancel
    pub async fn cancel(&self, id: &str, request: &CancelOrderRequest) -> ClientResult<()> {
        let value: Value = self
            .http
            .put(&format!("/orders/{}/cancel", segment(id)), request)
            .await?;
        expect_ack(value)
    }

    /// POST /orders/{id}/notes
    pub async fn add_note(&self, id: &str, request: &AdminNoteRequest) -> ClientResult<()> {
        let value: Value = self
            .http
            .post(&format!("/orders/{}/notes", segment(id)), request)
            .await?;
        expect_ack(value)
    }

    /// GET /orders/{id}/payment-proof; a 404 means no proof was submitted.
    pub async fn payment_proof(&self, id: &str) -> ClientResult<Option<PaymentProof>> {
        let path = format!("/orders/{}/payment-proof", segment(id));
        match self.http.get::<Value>(&path).await {
            Ok(Value::Null) => Ok(None),
            Ok(value) if value.get("paymentProof").is_some_and(Value::is_null) => Ok(None),
            Ok(value) => Ok(Some(envelope::entity_from_value(value, "paymentProof")?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// PUT /orders/{id}/verify-payment
    pub async fn verify_payment(&self, id: &str, request: &VerifyPaymentRequest) -> ClientResult<()> {
        let value: Value = self
            .http
            .put(&format!("/orders/{}/verify-payment", segment(id)), request)
            .await?;
        expect_ack(value)
    }
}

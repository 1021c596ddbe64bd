use serde_json::Value;
use shared::envelope;
use shared::models::{Customer, CustomerDraft, Message};

use super::{expect_ack, segment};
use crate::ClientResult;
use crate::http::HttpClient;

pub struct CustomersApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> CustomersApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /customers
    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        let value: Value = self.http.get("/customers").await?;
        Ok(envelope::list_from_value(value, "customers")?)
    }

    /// PUT /customers/{id}, returns the stored customer
    pub async fn update(&self, id: &str, draft: &CustomerDraft) -> ClientResult<Customer> {
        let value: Value = self.http.put(&format!("/customers/{}", segment(id)), draft).await?;
        Ok(envelope::entity_from_value(value, "customer")?)
    }

    /// DELETE /customers/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let value: Value = self.http.delete(&format!("/customers/{}", segment(id))).await?;
        expect_ack(value)
    }
}

pub struct MessagesApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> MessagesApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /messages
    pub async fn list(&self) -> ClientResult<Vec<Message>> {
        let value: Value = self.http.get("/messages").await?;
        Ok(envelope::list_from_value(value, "messages")?)
    }

    /// PUT /messages/{id} with the full record
    pub async fn update(&self, message: &Message) -> ClientResult<()> {
        let value: Value = self
            .http
            .put(&format!("/messages/{}", segment(&message.id)), message)
            .await?;
        expect_ack(value)
    }

    /// DELETE /messages/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let value: Value = self.http.delete(&format!("/messages/{}", segment(id))).await?;
        expect_ack(value)
    }
}

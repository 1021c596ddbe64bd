use serde_json::Value;
use shared::envelope;
use shared::models::{RefundDecision, RefundRequest, RefundStatus};

use super::{expect_ack, segment};
use crate::ClientResult;
use crate::http::HttpClient;

pub struct RefundsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> RefundsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /refunds
    pub async fn list(&self) -> ClientResult<Vec<RefundRequest>> {
        let value: Value = self.http.get("/refunds").await?;
        Ok(envelope::list_from_value(value, "refunds")?)
    }

    /// PATCH /refunds/{id} `{ status }`
    pub async fn set_status(&self, id: &str, status: RefundStatus) -> ClientResult<()> {
        let value: Value = self
            .http
            .patch(&format!("/refunds/{}", segment(id)), &RefundDecision { status })
            .await?;
        expect_ack(value)
    }
}

use serde_json::Value;
use shared::envelope;
use shared::models::DeliveryCosts;

use super::expect_ack;
use crate::ClientResult;
use crate::http::HttpClient;

pub struct SettingsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> SettingsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /admin/delivery-costs
    pub async fn delivery_costs(&self) -> ClientResult<DeliveryCosts> {
        let value: Value = self.http.get("/admin/delivery-costs").await?;
        Ok(envelope::entity_from_value(value, "deliveryCosts")?)
    }

    /// POST /admin/delivery-costs
    pub async fn update_delivery_costs(&self, costs: &DeliveryCosts) -> ClientResult<()> {
        let value: Value = self.http.post("/admin/delivery-costs", costs).await?;
        expect_ack(value)
    }
}

use serde_json::Value;
use shared::envelope;
use shared::models::{Coupon, CouponDraft};

use super::{expect_ack, segment};
use crate::ClientResult;
use crate::http::HttpClient;

pub struct CouponsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> CouponsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// GET /coupons
    pub async fn list(&self) -> ClientResult<Vec<Coupon>> {
        let value: Value = self.http.get("/coupons").await?;
        Ok(envelope::list_from_value(value, "coupons")?)
    }

    /// POST /coupons
    pub async fn create(&self, draft: &CouponDraft) -> ClientResult<()> {
        let value: Value = self.http.post("/coupons", draft).await?;
        expect_ack(value)
    }

    /// PUT /coupons/{id} with the full record
    pub async fn update(&self, coupon: &Coupon) -> ClientResult<()> {
        let value: Value = self
            .http
            .put(&format!("/coupons/{}", segment(&coupon.id)), coupon)
            .await?;
        expect_ack(value)
    }

    /// DELETE /coupons/{id}
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let value: Value = self.http.delete(&format!("/coupons/{}", segment(id))).await?;
        expect_ack(value)
    }
}

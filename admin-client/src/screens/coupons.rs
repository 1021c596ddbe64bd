use shared::forms::CouponForm;
use shared::models::Coupon;
use tracing::info;

use super::{Notice, delete_notice};
use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::list::ListView;
use crate::{ClientError, ClientResult};

pub struct CouponScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<Coupon>,
}

impl<'a, C: HttpClient> CouponScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::default(),
        }
    }

    pub fn list(&self) -> &ListView<Coupon> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<Coupon> {
        &mut self.list
    }

    /// Search by code or expiry.
    pub fn search(&mut self, text: &str) {
        self.list.set_search(text);
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let coupons = self.api.coupons().list().await?;
        self.list.set_items(coupons);
        Ok(self.list.len())
    }

    pub async fn add(&mut self, form: &CouponForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        self.api.coupons().create(&draft).await?;
        info!(code = %draft.code, "coupon added");
        self.refresh().await?;
        Ok(Notice::success(format!("Coupon {} added", draft.code)))
    }

    pub async fn edit(&mut self, id: &str, form: &CouponForm) -> ClientResult<Notice> {
        let draft = form.validate()?;
        let coupon = draft.into_coupon(self.existing(id)?.id);
        self.api.coupons().update(&coupon).await?;
        self.refresh().await?;
        Ok(Notice::success(format!("Coupon {} updated", coupon.code)))
    }

    /// PUT the full record with `active` flipped; on success only the local
    /// row changes, the list is not re-fetched.
    pub async fn toggle_active(&mut self, id: &str) -> ClientResult<Notice> {
        let mut coupon = self.existing(id)?;
        coupon.active = !coupon.active;
        self.api.coupons().update(&coupon).await?;

        let message = format!(
            "Coupon {} {}",
            coupon.code,
            if coupon.active { "activated" } else { "deactivated" }
        );
        self.list.replace(coupon);
        Ok(Notice::success(message))
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<Notice> {
        let result = self.api.coupons().delete(id).await;
        let outcome = self.list.apply_delete(id, result)?;
        Ok(delete_notice(outcome, "Coupon"))
    }

    fn existing(&self, id: &str) -> ClientResult<Coupon> {
        self.list
            .find(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Coupon {} is not in the list", id)))
    }
}

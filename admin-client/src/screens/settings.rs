use shared::forms::DeliveryCostForm;
use shared::models::DeliveryCosts;
use tracing::info;

use super::Notice;
use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::ClientResult;

/// Delivery-cost settings
pub struct DeliveryCostScreen<'a, C> {
    api: &'a AdminApi<C>,
    costs: DeliveryCosts,
}

impl<'a, C: HttpClient> DeliveryCostScreen<'a, C> {
    /// Starts from the default fees until [`load`](Self::load) succeeds.
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            costs: DeliveryCosts::default(),
        }
    }

    pub fn costs(&self) -> DeliveryCosts {
        self.costs
    }

    pub fn cost_for_city(&self, city: &str) -> f64 {
        self.costs.cost_for_city(city)
    }

    pub async fn load(&mut self) -> ClientResult<DeliveryCosts> {
        self.costs = self.api.settings().delivery_costs().await?;
        Ok(self.costs)
    }

    pub async fn save(&mut self, form: &DeliveryCostForm) -> ClientResult<Notice> {
        let costs = form.validate()?;
        self.api.settings().update_delivery_costs(&costs).await?;
        self.costs = costs;
        info!(inside = costs.dhaka_inside, outside = costs.dhaka_outside, "delivery costs updated");
        Ok(Notice::success("Delivery costs updated"))
    }
}

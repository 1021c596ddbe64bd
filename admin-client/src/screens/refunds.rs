use shared::models::{RefundRequest, RefundStatus};
use tracing::info;

use super::Notice;
use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::list::ListView;
use crate::{ClientError, ClientResult};

pub struct RefundScreen<'a, C> {
    api: &'a AdminApi<C>,
    list: ListView<RefundRequest>,
}

impl<'a, C: HttpClient> RefundScreen<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self {
            api,
            list: ListView::default(),
        }
    }

    pub fn list(&self) -> &ListView<RefundRequest> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<RefundRequest> {
        &mut self.list
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        let refunds = self.api.refunds().list().await?;
        self.list.set_items(refunds);
        Ok(self.list.len())
    }

    pub async fn approve(&mut self, id: &str) -> ClientResult<Notice> {
        self.decide(id, RefundStatus::Approved).await
    }

    pub async fn reject(&mut self, id: &str) -> ClientResult<Notice> {
        self.decide(id, RefundStatus::Rejected).await
    }

    /// PATCH the status, then update the local row in place.
    async fn decide(&mut self, id: &str, status: RefundStatus) -> ClientResult<Notice> {
        if self.list.find(id).is_none() {
            return Err(ClientError::NotFound(format!("Refund {} is not in the list", id)));
        }
        self.api.refunds().set_status(id, status).await?;
        self.list.update(id, |refund| refund.status = status);
        info!(refund_id = %id, %status, "refund reviewed");
        Ok(Notice::success(format!("Refund {}", status)))
    }
}

use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::listing::{OrderQuery, PAGE_SIZES, Page};
use shared::models::{Order, OrderStatus, PaymentStatus};
use shared::validation::FormError;
use tracing::debug;

use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::list::Debouncer;
use crate::ClientResult;

/// Server-filtered order list
///
/// Filters and pagination are sent to `GET /orders/admin/filtered`. Status,
/// payment status and page changes fetch immediately; search text is
/// debounced so only the last keystroke in a burst hits the server.
pub struct OrderBrowser<'a, C> {
    api: &'a AdminApi<C>,
    query: Mutex<OrderQuery>,
    current: Mutex<Option<Page<Order>>>,
    debouncer: Debouncer,
}

impl<'a, C: HttpClient> OrderBrowser<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self::with_debouncer(api, Debouncer::default())
    }

    pub fn with_debouncer(api: &'a AdminApi<C>, debouncer: Debouncer) -> Self {
        Self {
            api,
            query: Mutex::new(OrderQuery::default()),
            current: Mutex::new(None),
            debouncer,
        }
    }

    /// Start from a prepared query, e.g. one given on the command line.
    pub fn with_query(mut self, query: OrderQuery) -> Self {
        self.query = Mutex::new(query);
        self
    }

    fn query_mut(&self) -> MutexGuard<'_, OrderQuery> {
        self.query.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_mut(&self) -> MutexGuard<'_, Option<Page<Order>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn query(&self) -> OrderQuery {
        self.query_mut().clone()
    }

    /// Last page received, if any.
    pub fn page(&self) -> Option<Page<Order>> {
        self.current_mut().clone()
    }

    /// Fetch with the current query.
    pub async fn fetch(&self) -> ClientResult<Page<Order>> {
        let query = self.query();
        let page = self.api.orders().list_filtered(&query).await?;
        debug!(page = page.page, total = page.total, "orders fetched");
        *self.current_mut() = Some(page.clone());
        Ok(page)
    }

    pub async fn set_status(&self, status: Option<OrderStatus>) -> ClientResult<Page<Order>> {
        {
            let mut query = self.query_mut();
            query.status = status;
            query.page = 1;
        }
        self.fetch().await
    }

    pub async fn set_payment_status(&self, payment_status: Option<PaymentStatus>) -> ClientResult<Page<Order>> {
        {
            let mut query = self.query_mut();
            query.payment_status = payment_status;
            query.page = 1;
        }
        self.fetch().await
    }

    /// Page size must be one of [`PAGE_SIZES`].
    pub async fn set_page_size(&self, limit: u32) -> ClientResult<Page<Order>> {
        if !PAGE_SIZES.contains(&limit) {
            return Err(FormError::OutOfRange {
                field: "page size",
                min: PAGE_SIZES[0] as f64,
                max: PAGE_SIZES[PAGE_SIZES.len() - 1] as f64,
            }
            .into());
        }
        {
            let mut query = self.query_mut();
            query.limit = limit;
            query.page = 1;
        }
        self.fetch().await
    }

    /// Pages outside the last known range are not requested.
    pub async fn go_to_page(&self, page: u32) -> ClientResult<Option<Page<Order>>> {
        let total_pages = self.current_mut().as_ref().map_or(1, |p| p.total_pages);
        if page == 0 || page > total_pages {
            return Ok(None);
        }
        self.query_mut().page = page;
        self.fetch().await.map(Some)
    }

    /// Record the search text and fetch once the input settles.
    ///
    /// Returns `Ok(None)` when a later call superseded this one.
    pub async fn search(&self, text: &str) -> ClientResult<Option<Page<Order>>> {
        {
            let mut query = self.query_mut();
            query.search = text.to_string();
            query.page = 1;
        }
        if !self.debouncer.settle().await {
            return Ok(None);
        }
        self.fetch().await.map(Some)
    }
}

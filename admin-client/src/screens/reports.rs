//! Dashboard and sales report

use shared::report::{DashboardStats, SalesReport};

use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::ClientResult;

/// Fetch orders, products and customers together and count them.
pub async fn dashboard<C: HttpClient>(api: &AdminApi<C>) -> ClientResult<DashboardStats> {
    let orders_api = api.orders();
    let products_api = api.products();
    let customers_api = api.customers();
    let (orders, products, customers) =
        tokio::try_join!(orders_api.list(), products_api.list(), customers_api.list())?;
    Ok(DashboardStats::compute(&orders, &products, &customers))
}

pub async fn sales_report<C: HttpClient>(api: &AdminApi<C>) -> ClientResult<SalesReport> {
    let orders = api.orders().list().await?;
    Ok(SalesReport::compute(&orders))
}

//! Dashboard and sales report figures
//!
//! Computed client-side from fetched lists. Money is summed as `Decimal` so
//! totals do not drift, and rounded to two places at the edge.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::Serialize;

use crate::models::{Customer, Order, OrderStatus, Product};

/// Month bucket for orders without a parseable `createdAt`
pub const UNKNOWN_MONTH: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    pub total_sales: f64,
    pub total_products: usize,
    pub total_customers: usize,
}

impl DashboardStats {
    pub fn compute(orders: &[Order], products: &[Product], customers: &[Customer]) -> Self {
        Self {
            total_orders: orders.len(),
            total_sales: to_money(sales_total(orders)),
            total_products: products.len(),
            total_customers: customers.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    /// `YYYY-MM`
    pub month: String,
    pub orders: usize,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_sales: f64,
    /// Oldest month first, unknown last
    pub by_month: Vec<MonthlySales>,
    pub status_counts: BTreeMap<OrderStatus, usize>,
}

impl SalesReport {
    /// Every fetched order counts towards sales, whatever its status.
    pub fn compute(orders: &[Order]) -> Self {
        let mut months: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();
        let mut status_counts = BTreeMap::new();

        for order in orders {
            *status_counts.entry(order.status).or_insert(0) += 1;
            let month = order
                .created_at
                .as_deref()
                .and_then(month_of)
                .unwrap_or_else(|| UNKNOWN_MONTH.to_string());
            let bucket = months.entry(month).or_insert((0, Decimal::ZERO));
            bucket.0 += 1;
            bucket.1 += money(order.total);
        }

        let mut by_month: Vec<MonthlySales> = months
            .into_iter()
            .map(|(month, (orders, total))| MonthlySales {
                month,
                orders,
                total: to_money(total),
            })
            .collect();
        // "unknown" sorts after digits already; keep it explicit
        by_month.sort_by_key(|m| (m.month == UNKNOWN_MONTH, m.month.clone()));

        Self {
            total_sales: to_money(sales_total(orders)),
            by_month,
            status_counts,
        }
    }
}

fn sales_total(orders: &[Order]) -> Decimal {
    orders.iter().map(|o| money(o.total)).sum()
}

fn money(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

fn to_money(value: Decimal) -> f64 {
    value.round_dp(2).to_f64().unwrap_or_default()
}

/// `YYYY-MM` from an RFC 3339 timestamp or a leading `YYYY-MM-DD`.
fn month_of(timestamp: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format("%Y-%m").to_string());
    }
    let date_part = timestamp.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m").to_string())
}

//! Client-side filtering and pagination
//!
//! Every admin list keeps the fetched collection in memory and recomputes the
//! visible rows from a [`ListFilter`] on each change. Orders are the exception:
//! they are filtered and paginated by the server through [`OrderQuery`].

use serde::{Deserialize, Serialize};

use crate::models::{
    Category, Coupon, Customer, Message, Order, OrderStatus, PaymentStatus, Product,
    RefundRequest, Subcategory,
};

/// Page sizes offered by the order list
pub const PAGE_SIZES: [u32; 3] = [10, 25, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filter state of a list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Free text, matched case-insensitively
    pub search: String,
    /// Exact category (products)
    pub category: Option<String>,
    /// Exact status, compared against the record's wire value
    pub status: Option<String>,
    /// Exact payment status (orders)
    pub payment_status: Option<String>,
}

impl ListFilter {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.status.is_none()
            && self.payment_status.is_none()
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// A record that can be shown in a filtered admin list
pub trait Listable {
    fn id(&self) -> &str;

    fn matches(&self, filter: &ListFilter) -> bool;
}

/// One page of a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Current page (1-based)
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    /// Never below 1, so page 1 of an empty list is valid
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            items,
            page: page.max(1),
            per_page,
            total,
            total_pages: total_pages(total, per_page),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    (total.div_ceil(per_page as u64) as u32).max(1)
}

/// Slice `items` into page `page` (1-based, clamped to the last page).
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Page<T> {
    let total = items.len() as u64;
    let pages = total_pages(total, per_page);
    let page = page.clamp(1, pages);
    let slice = if per_page == 0 {
        items.to_vec()
    } else {
        items
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect()
    };
    Page::new(slice, page, per_page, total)
}

fn contains(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

fn status_matches(wanted: &Option<String>, actual: &str) -> bool {
    wanted
        .as_deref()
        .is_none_or(|w| w.is_empty() || w.eq_ignore_ascii_case(actual))
}

impl Listable for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let needle = filter.needle();
        status_matches(&filter.status, self.status.as_str())
            && status_matches(&filter.payment_status, self.payment_status.as_str())
            && (contains(&self.order_number, &needle)
                || contains(&self.id, &needle)
                || contains(self.customer_label(), &needle))
    }
}

impl Listable for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let category_ok = filter
            .category
            .as_deref()
            .is_none_or(|c| c.is_empty() || c == self.category);
        category_ok && contains(&self.name, &filter.needle())
    }
}

impl Listable for Coupon {
    fn id(&self) -> &str {
        &self.id
    }

    /// Code case-insensitively, or expiry by substring.
    fn matches(&self, filter: &ListFilter) -> bool {
        let needle = filter.needle();
        let active = if self.active { "active" } else { "inactive" };
        status_matches(&filter.status, active)
            && (contains(&self.code, &needle) || self.expiry.contains(filter.search.trim()))
    }
}

impl Listable for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let needle = filter.needle();
        contains(&self.title, &needle) || self.items.iter().any(|item| contains(item, &needle))
    }
}

impl Listable for Subcategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let category_ok = filter
            .category
            .as_deref()
            .is_none_or(|c| c.is_empty() || c == self.category_id);
        category_ok && contains(&self.name, &filter.needle())
    }
}

impl Listable for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let needle = filter.needle();
        contains(&self.name, &needle) || contains(&self.email, &needle)
    }
}

impl Listable for Message {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let needle = filter.needle();
        status_matches(&filter.status, self.status.as_str())
            && (contains(&self.name, &needle)
                || contains(&self.email, &needle)
                || contains(&self.subject, &needle))
    }
}

impl Listable for RefundRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &ListFilter) -> bool {
        let needle = filter.needle();
        status_matches(&filter.status, self.status.as_str())
            && (contains(&self.customer, &needle)
                || self.order_id.as_deref().is_some_and(|o| contains(o, &needle)))
    }
}

/// Server-side order filter for `GET /orders/admin/filtered`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub search: String,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            status: None,
            payment_status: None,
            search: String::new(),
        }
    }
}

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Page size; values outside [`PAGE_SIZES`] fall back to the default.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = if PAGE_SIZES.contains(&limit) {
            limit
        } else {
            DEFAULT_PAGE_SIZE
        };
        self
    }

    pub fn status(mut self, status: Option<OrderStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn payment_status(mut self, payment_status: Option<PaymentStatus>) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Query string without the leading `?`; empty filters are omitted.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.limit);
        if let Some(status) = self.status {
            query.push_str(&format!("&status={}", status.as_str()));
        }
        if let Some(payment_status) = self.payment_status {
            query.push_str(&format!("&paymentStatus={}", payment_status.as_str()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            query.push_str(&format!("&search={}", urlencoding::encode(search)));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(id: &str, code: &str, expiry: &str, active: bool) -> Coupon {
        Coupon {
            id: id.into(),
            code: code.into(),
            discount: 10.0,
            expiry: expiry.into(),
            active,
        }
    }

    #[test]
    fn test_coupon_search_by_code_or_expiry() {
        let eid = coupon("1", "EID10", "2025-04-10", true);
        let winter = coupon("2", "WINTER", "2024-12-31", false);

        let by_code = ListFilter::search("eid");
        assert!(eid.matches(&by_code));
        assert!(!winter.matches(&by_code));

        let by_expiry = ListFilter::search("2024-12");
        assert!(!eid.matches(&by_expiry));
        assert!(winter.matches(&by_expiry));

        let inactive = ListFilter::default().with_status("inactive");
        assert!(!eid.matches(&inactive));
        assert!(winter.matches(&inactive));
    }

    #[test]
    fn test_product_category_is_exact() {
        let product = Product {
            id: "p1".into(),
            name: "Panjabi Classic".into(),
            price: 1500.0,
            category: "Men".into(),
            images: vec!["panjabi.jpg".into()],
            description: String::new(),
            stock: Some(4),
            is_trending: false,
            is_top_product: false,
        };
        assert!(product.matches(&ListFilter::search("PANJABI").with_category("Men")));
        assert!(!product.matches(&ListFilter::default().with_category("Women")));
        assert!(!product.matches(&ListFilter::default().with_category("me")));
    }

    #[test]
    fn test_paginate_clamps_and_slices() {
        let items: Vec<u32> = (1..=23).collect();

        let page = paginate(&items, 3, 10);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());

        let clamped = paginate(&items, 9, 10);
        assert_eq!(clamped.page, 3);

        let empty = paginate::<u32>(&[], 1, 10);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_order_query_string() {
        let query = OrderQuery::new()
            .page(2)
            .limit(25)
            .status(Some(OrderStatus::Shipped))
            .payment_status(Some(PaymentStatus::Paid))
            .search(" rahim khan ");
        assert_eq!(
            query.to_query_string(),
            "page=2&limit=25&status=shipped&paymentStatus=paid&search=rahim%20khan"
        );

        assert_eq!(OrderQuery::new().limit(30).to_query_string(), "page=1&limit=10");
    }
}

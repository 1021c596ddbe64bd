//! Mock state
//!
//! One [`Store`] behind a lock plus the request journal and test hooks
//! (injected failures, artificial latency). Locks are never held across an
//! await.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::Utc;
use shared::models::*;

use crate::auth;
use crate::journal::{InjectedFailure, RecordedRequest};

/// Seeded accounts: `(user, password)`
pub const ADMIN_EMAIL: &str = "admin@shop.test";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const STAFF_EMAIL: &str = "staff@shop.test";
pub const STAFF_PASSWORD: &str = "staff123";

/// Backend data
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<(AdminUser, String)>,
    pub orders: Vec<Order>,
    pub proofs: HashMap<String, PaymentProof>,
    /// Orders the admin may not open (403)
    pub restricted_orders: HashSet<String>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub coupons: Vec<Coupon>,
    pub customers: Vec<Customer>,
    pub messages: Vec<Message>,
    pub refunds: Vec<RefundRequest>,
    pub delivery_costs: DeliveryCosts,
    next_id: u64,
}

impl Store {
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, 100 + self.next_id)
    }

    pub fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }
}

#[derive(Clone)]
pub struct MockState {
    store: Arc<RwLock<Store>>,
    journal: Arc<Mutex<Vec<RecordedRequest>>>,
    failures: Arc<Mutex<Vec<InjectedFailure>>>,
    latency: Arc<Mutex<Option<Duration>>>,
    jwt_secret: Arc<str>,
}

impl MockState {
    pub fn new(jwt_secret: &str) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            journal: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(Vec::new())),
            latency: Arc::new(Mutex::new(None)),
            jwt_secret: Arc::from(jwt_secret),
        }
    }

    /// State with demo data and the default secret.
    pub fn seeded() -> Self {
        Self::seeded_with_secret(crate::config::MockConfig::DEFAULT_SECRET)
    }

    pub fn seeded_with_secret(jwt_secret: &str) -> Self {
        let state = Self::new(jwt_secret);
        state.with_store(seed);
        state
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the store (test setup, server-side changes).
    pub fn with_store<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.write())
    }

    // ── Tokens ──────────────────────────────────────────────────────

    /// Valid token for the seeded admin.
    pub fn admin_token(&self) -> String {
        self.token_for(ADMIN_EMAIL, auth::TOKEN_TTL_SECS)
    }

    /// Token for a seeded user, expiring `ttl_secs` from now (negative for
    /// an already expired one). Empty when the user does not exist.
    pub fn token_for(&self, email: &str, ttl_secs: i64) -> String {
        let user = self
            .read()
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone());
        match user {
            Some(user) => auth::issue_token(&self.jwt_secret, &user, Utc::now().timestamp() + ttl_secs)
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    // ── Journal ─────────────────────────────────────────────────────

    fn journal_mut(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn record(&self, request: RecordedRequest) {
        self.journal_mut().push(request);
    }

    pub fn journal(&self) -> Vec<RecordedRequest> {
        self.journal_mut().clone()
    }

    pub fn clear_journal(&self) {
        self.journal_mut().clear();
    }

    /// Requests with `method` to the API-relative `path` (query ignored).
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.journal_mut()
            .iter()
            .filter(|r| r.is(method, path))
            .count()
    }

    /// Requests that changed data (anything but GET).
    pub fn mutation_count(&self) -> usize {
        self.journal_mut().iter().filter(|r| r.method != "GET").count()
    }

    // ── Test hooks ──────────────────────────────────────────────────

    /// Answer the next `method path` request with `status` instead of
    /// handling it.
    pub fn fail_next(&self, method: &str, path: &str, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(InjectedFailure {
                method: method.to_string(),
                path: path.to_string(),
                status,
                message: message.to_string(),
            });
    }

    pub(crate) fn take_failure(&self, method: &str, path: &str) -> Option<InjectedFailure> {
        let mut failures = self.failures.lock().unwrap_or_else(PoisonError::into_inner);
        let index = failures
            .iter()
            .position(|f| f.method == method && f.path == path)?;
        Some(failures.remove(index))
    }

    /// Delay every request by `latency`.
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock().unwrap_or_else(PoisonError::into_inner) = latency;
    }

    pub(crate) fn latency(&self) -> Option<Duration> {
        *self.latency.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Convenience accessors ───────────────────────────────────────

    pub fn order(&self, id: &str) -> Option<Order> {
        self.read().orders.iter().find(|o| o.id == id).cloned()
    }

    pub fn payment_proof(&self, order_id: &str) -> Option<PaymentProof> {
        self.read().proofs.get(order_id).cloned()
    }

    pub fn restrict_order(&self, id: &str) {
        self.write().restricted_orders.insert(id.to_string());
    }

    pub fn coupon(&self, id: &str) -> Option<Coupon> {
        self.read().coupons.iter().find(|c| c.id == id).cloned()
    }

    /// Delete a category behind the client's back.
    pub fn remove_category(&self, id: &str) -> bool {
        let mut store = self.write();
        let before = store.categories.len();
        store.categories.retain(|c| c.id != id);
        store.categories.len() != before
    }
}

fn user(id: &str, name: &str, email: &str, role: &str) -> AdminUser {
    AdminUser {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role: role.into(),
    }
}

fn item(product_id: &str, name: &str, price: f64, quantity: u32, size: Option<&str>) -> OrderItem {
    OrderItem {
        product_id: Some(product_id.into()),
        name: name.into(),
        price,
        quantity,
        size: size.map(str::to_string),
        image: None,
    }
}

fn address(name: &str, city: &str) -> ShippingAddress {
    ShippingAddress {
        name: name.into(),
        phone: "01700000000".into(),
        address: "House 12, Road 4".into(),
        city: city.into(),
        area: None,
    }
}

fn order(
    id: &str,
    number: &str,
    status: OrderStatus,
    payment_status: PaymentStatus,
    items: Vec<OrderItem>,
    shipping: ShippingAddress,
    created_at: &str,
) -> Order {
    let subtotal: f64 = items.iter().map(|i| i.price * i.quantity as f64).sum();
    let delivery_cost = DeliveryCosts::default().cost_for_city(&shipping.city);
    Order {
        id: id.into(),
        order_number: number.into(),
        status,
        payment_status,
        items,
        subtotal,
        delivery_cost,
        total: subtotal + delivery_cost,
        shipping_address: Some(shipping),
        admin_notes: Vec::new(),
        tracking_number: None,
        cancellation_reason: None,
        customer: None,
        created_at: Some(created_at.into()),
    }
}

fn proof(transaction_id: &str, amount: f64, status: ProofStatus) -> PaymentProof {
    PaymentProof {
        transaction_id: transaction_id.into(),
        sender_number: "01811111111".into(),
        sender_name: "Rahim Uddin".into(),
        amount,
        status,
        admin_notes: None,
        submitted_at: Some("2024-03-02T09:30:00Z".into()),
        verified_at: None,
    }
}

fn seed(store: &mut Store) {
    store.users = vec![
        (user("u-1", "Store Admin", ADMIN_EMAIL, "admin"), ADMIN_PASSWORD.into()),
        (user("u-2", "Floor Staff", STAFF_EMAIL, "user"), STAFF_PASSWORD.into()),
    ];

    let mut shipped = order(
        "ord-1003",
        "ORD-1003",
        OrderStatus::Shipped,
        PaymentStatus::Paid,
        vec![item("p-1", "Classic Panjabi", 1500.0, 1, Some("L"))],
        address("Nusrat Jahan", "Chattogram"),
        "2024-02-11T14:00:00Z",
    );
    shipped.tracking_number = Some("TRK-55012".into());

    let mut cancelled = order(
        "ord-1005",
        "ORD-1005",
        OrderStatus::Cancelled,
        PaymentStatus::Refunded,
        vec![item("p-3", "Kids Hoodie", 900.0, 1, Some("S"))],
        address("Tanvir Ahmed", "Dhaka"),
        "2024-01-20T08:15:00Z",
    );
    cancelled.cancellation_reason = Some("Customer changed their mind".into());

    store.orders = vec![
        order(
            "ord-1001",
            "ORD-1001",
            OrderStatus::Pending,
            PaymentStatus::Pending,
            vec![
                item("p-1", "Classic Panjabi", 1500.0, 1, Some("M")),
                item("p-2", "Cotton Saree", 2200.0, 1, None),
            ],
            address("Rahim Uddin", "Dhaka"),
            "2024-03-02T09:00:00Z",
        ),
        order(
            "ord-1002",
            "ORD-1002",
            OrderStatus::Processing,
            PaymentStatus::Paid,
            vec![item("p-2", "Cotton Saree", 2200.0, 2, None)],
            address("Karim Hossain", "Sylhet"),
            "2024-03-05T12:30:00Z",
        ),
        shipped,
        order(
            "ord-1004",
            "ORD-1004",
            OrderStatus::Delivered,
            PaymentStatus::Paid,
            vec![item("p-3", "Kids Hoodie", 900.0, 2, Some("M"))],
            address("Farhana Akter", "Dhaka"),
            "2024-02-01T10:00:00Z",
        ),
        cancelled,
    ];

    store
        .proofs
        .insert("ord-1001".into(), proof("TX-88231", 3760.0, ProofStatus::Pending));
    let mut verified = proof("TX-77120", 1860.0, ProofStatus::Verified);
    verified.verified_at = Some("2024-02-01T11:00:00Z".into());
    store.proofs.insert("ord-1004".into(), verified);

    store.products = vec![
        Product {
            id: "p-1".into(),
            name: "Classic Panjabi".into(),
            price: 1500.0,
            category: "Men".into(),
            images: vec!["panjabi-front.jpg".into()],
            description: "Cotton panjabi with embroidered collar".into(),
            stock: Some(25),
            is_trending: true,
            is_top_product: false,
        },
        Product {
            id: "p-2".into(),
            name: "Cotton Saree".into(),
            price: 2200.0,
            category: "Women".into(),
            images: vec!["saree.jpg".into(), "saree-detail.jpg".into()],
            description: String::new(),
            stock: Some(8),
            is_trending: false,
            is_top_product: true,
        },
        Product {
            id: "p-3".into(),
            name: "Kids Hoodie".into(),
            price: 900.0,
            category: "Kids".into(),
            images: vec!["hoodie.jpg".into()],
            description: String::new(),
            stock: None,
            is_trending: false,
            is_top_product: false,
        },
    ];

    store.categories = vec![
        Category {
            id: "cat-1".into(),
            title: "Men".into(),
            items: vec!["Panjabi".into(), "Shirts".into()],
            image: Some("men.jpg".into()),
        },
        Category {
            id: "cat-2".into(),
            title: "Women".into(),
            items: vec!["Saree".into()],
            image: None,
        },
        Category {
            id: "cat-3".into(),
            title: "Kids".into(),
            items: Vec::new(),
            image: None,
        },
    ];

    store.subcategories = vec![
        Subcategory {
            id: "sub-1".into(),
            category_id: "cat-1".into(),
            name: "Panjabi".into(),
        },
        Subcategory {
            id: "sub-2".into(),
            category_id: "cat-1".into(),
            name: "Shirts".into(),
        },
        Subcategory {
            id: "sub-3".into(),
            category_id: "cat-2".into(),
            name: "Saree".into(),
        },
    ];

    store.coupons = vec![
        Coupon {
            id: "1".into(),
            code: "EID10".into(),
            discount: 10.0,
            expiry: "2025-04-10".into(),
            active: true,
        },
        Coupon {
            id: "2".into(),
            code: "WINTER25".into(),
            discount: 25.0,
            expiry: "2024-12-31".into(),
            active: false,
        },
    ];

    store.customers = vec![
        Customer {
            id: "cus-1".into(),
            name: "Rahim Uddin".into(),
            email: "rahim@mail.test".into(),
            joined: "2023-11-02".into(),
        },
        Customer {
            id: "cus-2".into(),
            name: "Nusrat Jahan".into(),
            email: "nusrat@mail.test".into(),
            joined: "2024-01-15".into(),
        },
    ];

    store.messages = vec![
        Message {
            id: "msg-1".into(),
            name: "Karim Hossain".into(),
            email: "karim@mail.test".into(),
            subject: "Delivery time".into(),
            message: "When will my saree arrive?".into(),
            status: MessageStatus::New,
            reply: None,
        },
        Message {
            id: "msg-2".into(),
            name: "Farhana Akter".into(),
            email: "farhana@mail.test".into(),
            subject: "Size exchange".into(),
            message: "Can I exchange the hoodie for a larger size?".into(),
            status: MessageStatus::Resolved,
            reply: Some("Yes, within 7 days.".into()),
        },
    ];

    store.refunds = vec![
        RefundRequest {
            id: "ref-1".into(),
            order_id: Some("ord-1004".into()),
            customer: "Farhana Akter".into(),
            amount: 900.0,
            reason: "Damaged item".into(),
            status: RefundStatus::Pending,
        },
        RefundRequest {
            id: "ref-2".into(),
            order_id: Some("ord-1002".into()),
            customer: "Karim Hossain".into(),
            amount: 2200.0,
            reason: "Wrong color".into(),
            status: RefundStatus::Pending,
        },
    ];

    store.delivery_costs = DeliveryCosts::default();
}

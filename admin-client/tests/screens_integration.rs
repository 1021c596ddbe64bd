// admin-client/tests/screens_integration.rs
// Catalog, coupon, people, refund and settings screens against the mock API

mod common;

use admin_client::screens::reports;
use admin_client::screens::{
    CategoryScreen, CouponScreen, CustomerScreen, DeliveryCostScreen, MessageScreen,
    ProductScreen, RefundScreen, SubcategoryScreen,
};
use admin_client::{ClientError, Notice, NoticeLevel};
use shared::FormError;
use shared::forms::{
    CategoryForm, CouponForm, CustomerForm, DeliveryCostForm, ProductForm, ReplyForm,
    SubcategoryForm,
};
use shared::models::{MessageStatus, OrderStatus, RefundStatus};

// ========== Coupons ==========

#[tokio::test]
async fn test_coupon_form_errors_send_nothing() {
    let (state, api) = common::admin_api();
    let mut screen = CouponScreen::new(&api);

    let err = screen.add(&CouponForm::new("", "10", "2025-01-01")).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(FormError::Required { .. })));

    let err = screen.add(&CouponForm::new("SALE", "", "2025-01-01")).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(_)));

    assert!(state.journal().is_empty());
}

#[tokio::test]
async fn test_coupon_add_refreshes_list() {
    let (state, api) = common::admin_api();
    let mut screen = CouponScreen::new(&api);
    screen.refresh().await.unwrap();

    let notice = screen
        .add(&CouponForm::new("PUJA15", "15", "2025-10-01"))
        .await
        .unwrap();

    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(screen.list().len(), 3);
    assert!(screen.list().items().iter().any(|c| c.code == "PUJA15"));
    assert_eq!(state.count("GET", "/coupons"), 2);
}

#[tokio::test]
async fn test_coupon_toggle_does_not_refetch() {
    let (state, api) = common::admin_api();
    let mut screen = CouponScreen::new(&api);
    screen.refresh().await.unwrap();

    let notice = screen.toggle_active("2").await.unwrap();

    assert_eq!(notice.message, "Coupon WINTER25 activated");
    assert!(screen.list().find("2").unwrap().active);
    assert!(state.coupon("2").unwrap().active);
    assert_eq!(state.count("PUT", "/coupons/2"), 1);
    assert_eq!(state.count("GET", "/coupons"), 1);
}

#[tokio::test]
async fn test_coupon_search_matches_code_and_expiry() {
    let (_state, api) = common::admin_api();
    let mut screen = CouponScreen::new(&api);
    screen.refresh().await.unwrap();

    screen.search("eid");
    assert_eq!(screen.list().visible().len(), 1);

    screen.search("2024-12");
    let visible = screen.list().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].code, "WINTER25");
}

// ========== Categories ==========

#[tokio::test]
async fn test_category_delete_already_gone_is_info() {
    let (state, api) = common::admin_api();
    let mut screen = CategoryScreen::new(&api);
    screen.refresh().await.unwrap();
    assert!(state.remove_category("cat-3"));

    let notice = screen.delete("cat-3").await.unwrap();

    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "Category not found, removed from list");
    assert!(screen.list().find("cat-3").is_none());
}

#[tokio::test]
async fn test_category_delete_failure_keeps_row() {
    let (state, api) = common::admin_api();
    let mut screen = CategoryScreen::new(&api);
    screen.refresh().await.unwrap();
    state.fail_next("DELETE", "/categories/cat-2", 500, "disk full");

    let notice = Notice::from(screen.delete("cat-2").await);

    assert!(notice.is_error());
    assert_eq!(notice.message, "disk full");
    assert!(screen.list().find("cat-2").is_some());
}

#[tokio::test]
async fn test_category_add_appends_stored_record() {
    let (state, api) = common::admin_api();
    let mut screen = CategoryScreen::new(&api);
    screen.refresh().await.unwrap();

    screen
        .add(&CategoryForm::new("Accessories", "Belts, Caps"))
        .await
        .unwrap();

    let added = screen.list().items().last().unwrap();
    assert_eq!(added.title, "Accessories");
    assert_eq!(added.items, vec!["Belts", "Caps"]);
    assert!(!added.id.is_empty());
    assert_eq!(state.count("GET", "/categories/admin"), 1);
}

#[tokio::test]
async fn test_category_duplicate_title_is_validation_error() {
    let (_state, api) = common::admin_api();
    let mut screen = CategoryScreen::new(&api);
    screen.refresh().await.unwrap();

    let err = screen.add(&CategoryForm::new("men", "")).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(m) if m == "Category already exists"));
    assert_eq!(screen.list().len(), 3);
}

#[tokio::test]
async fn test_subcategory_flow_refreshes() {
    let (state, api) = common::admin_api();
    let mut screen = SubcategoryScreen::new(&api);
    screen.refresh().await.unwrap();

    screen.filter_category(Some("cat-1"));
    assert_eq!(screen.list().visible().len(), 2);

    let err = screen.add(&SubcategoryForm::new("", "Polo")).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(_)));

    screen.add(&SubcategoryForm::new("cat-1", "Polo")).await.unwrap();
    assert_eq!(screen.list().visible().len(), 3);

    screen.delete("sub-1").await.unwrap();
    assert_eq!(screen.list().visible().len(), 2);
    assert_eq!(state.count("GET", "/categories/subcategory"), 3);
}

#[tokio::test]
async fn test_subcategory_delete_survives_failed_refresh() {
    let (state, api) = common::admin_api();
    let mut screen = SubcategoryScreen::new(&api);
    screen.refresh().await.unwrap();
    state.fail_next("GET", "/categories/subcategory", 503, "busy");

    let notice = screen.delete("sub-3").await.unwrap();

    assert_eq!(notice, Notice::success("Subcategory deleted"));
    assert!(screen.list().find("sub-3").is_none());
    assert_eq!(state.count("DELETE", "/categories/subcategory/sub-3"), 1);
}

// ========== Products ==========

#[tokio::test]
async fn test_product_create_requires_image() {
    let (state, api) = common::admin_api();
    let mut screen = ProductScreen::new(&api);

    let mut form = ProductForm {
        name: "Linen Shirt".into(),
        price: "1200".into(),
        category: "Men".into(),
        ..ProductForm::default()
    };
    let err = screen.create(&form).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(FormError::Missing { what: "image" })));
    assert!(state.journal().is_empty());

    form.images.push("linen.jpg".into());
    screen.create(&form).await.unwrap();
    assert!(screen.list().items().iter().any(|p| p.name == "Linen Shirt"));
}

#[tokio::test]
async fn test_product_category_filter() {
    let (_state, api) = common::admin_api();
    let mut screen = ProductScreen::new(&api);
    screen.refresh().await.unwrap();

    assert_eq!(screen.categories(), vec!["Kids", "Men", "Women"]);
    screen.filter_category(Some("Women"));
    let visible = screen.list().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Cotton Saree");
}

// ========== Customers and messages ==========

#[tokio::test]
async fn test_customer_edit_uses_server_record() {
    let (_state, api) = common::admin_api();
    let mut screen = CustomerScreen::new(&api);
    screen.refresh().await.unwrap();

    let form = CustomerForm {
        name: "Rahim U.".into(),
        email: "rahim.u@mail.test".into(),
        joined: "2023-11-02".into(),
    };
    screen.edit("cus-1", &form).await.unwrap();

    let customer = screen.list().find("cus-1").unwrap();
    assert_eq!(customer.email, "rahim.u@mail.test");

    let err = screen
        .edit("cus-1", &CustomerForm { email: "not-an-email".into(), ..form })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Form(FormError::InvalidEmail { .. })));
}

#[tokio::test]
async fn test_message_reply_and_resolve() {
    let (_state, api) = common::admin_api();
    let mut screen = MessageScreen::new(&api);
    screen.refresh().await.unwrap();

    screen.reply("msg-1", &ReplyForm::new("Tomorrow by noon.")).await.unwrap();
    let message = screen.list().find("msg-1").unwrap();
    assert_eq!(message.status, MessageStatus::Replied);
    assert_eq!(message.reply.as_deref(), Some("Tomorrow by noon."));

    screen.toggle_resolved("msg-2").await.unwrap();
    assert_eq!(screen.list().find("msg-2").unwrap().status, MessageStatus::New);

    let err = screen.reply("msg-1", &ReplyForm::new("  ")).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(_)));
}

#[tokio::test]
async fn test_message_delete_survives_failed_refresh() {
    let (state, api) = common::admin_api();
    let mut screen = MessageScreen::new(&api);
    screen.refresh().await.unwrap();
    state.fail_next("GET", "/messages", 500, "database unavailable");

    let notice = screen.delete("msg-2").await.unwrap();

    assert!(!notice.is_error());
    assert!(screen.list().find("msg-2").is_none());
    assert_eq!(screen.list().len(), 1);
}

// ========== Refunds ==========

#[tokio::test]
async fn test_refund_decision_updates_row() {
    let (state, api) = common::admin_api();
    let mut screen = RefundScreen::new(&api);
    screen.refresh().await.unwrap();

    screen.approve("ref-1").await.unwrap();
    screen.reject("ref-2").await.unwrap();

    assert_eq!(screen.list().find("ref-1").unwrap().status, RefundStatus::Approved);
    assert_eq!(screen.list().find("ref-2").unwrap().status, RefundStatus::Rejected);
    assert_eq!(state.count("PATCH", "/refunds/ref-1"), 1);
    assert_eq!(state.count("GET", "/refunds"), 1);

    let err = screen.approve("ref-9").await.unwrap_err();
    assert!(err.is_not_found());
}

// ========== Delivery costs ==========

#[tokio::test]
async fn test_delivery_costs_load_and_save() {
    let (state, api) = common::admin_api();
    let mut screen = DeliveryCostScreen::new(&api);

    let costs = screen.load().await.unwrap();
    assert_eq!(costs.dhaka_inside, 60.0);
    assert_eq!(screen.cost_for_city(" dhaka "), 60.0);
    assert_eq!(screen.cost_for_city("Khulna"), 120.0);

    screen.save(&DeliveryCostForm::new("70", "150")).await.unwrap();
    assert_eq!(screen.costs().dhaka_outside, 150.0);
    assert_eq!(state.read().delivery_costs.dhaka_inside, 70.0);

    let err = screen.save(&DeliveryCostForm::new("-5", "150")).await.unwrap_err();
    assert!(matches!(err, ClientError::Form(FormError::Negative { .. })));
}

// ========== Reports ==========

#[tokio::test]
async fn test_dashboard_counts_everything() {
    let (_state, api) = common::admin_api();

    let stats = reports::dashboard(&api).await.unwrap();

    assert_eq!(stats.total_orders, 5);
    assert_eq!(stats.total_products, 3);
    assert_eq!(stats.total_customers, 2);
    assert_eq!(stats.total_sales, 12720.0);
}

#[tokio::test]
async fn test_sales_report_groups_by_month() {
    let (_state, api) = common::admin_api();

    let report = reports::sales_report(&api).await.unwrap();

    let months: Vec<&str> = report.by_month.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
    assert_eq!(report.by_month[0].total, 960.0);
    assert_eq!(report.by_month[2].total, 8280.0);
    assert_eq!(report.status_counts.get(&OrderStatus::Cancelled), Some(&1));
}

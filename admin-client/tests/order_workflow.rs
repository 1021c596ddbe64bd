// admin-client/tests/order_workflow.rs
// Order detail workflow against the in-memory mock API

mod common;

use std::time::Duration;

use admin_client::{ClientError, OrderBrowser, OrderWorkflow, Debouncer};
use shared::WorkflowError;
use shared::models::{OrderStatus, PaymentStatus, ProofStatus, VerificationDecision};

#[tokio::test]
async fn test_load_order_selects_current_status() {
    common::init_tracing();
    let (_state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);

    let order = workflow.load_order(Some("ord-1002")).await.unwrap();

    assert_eq!(order.order_number, "ORD-1002");
    assert_eq!(workflow.selected_status(), Some(OrderStatus::Processing));
    assert!(workflow.available_actions().can_cancel);
}

#[tokio::test]
async fn test_blank_order_id_sends_nothing() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);

    let err = workflow.load_order(Some("   ")).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(m) if m == "Order ID is missing"));

    let err = workflow.load_order(None).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(state.journal().is_empty());
}

#[tokio::test]
async fn test_restricted_order_is_forbidden() {
    let (state, api) = common::admin_api();
    state.restrict_order("ord-1003");
    let workflow = OrderWorkflow::new(&api);

    let err = workflow.load_order(Some("ord-1003")).await.unwrap_err();

    assert!(matches!(err, ClientError::Forbidden(_)));
    assert!(workflow.order().is_none());
}

#[tokio::test]
async fn test_switching_orders_drops_previous_proof() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1001")).await.unwrap();
    assert!(workflow.load_payment_proof().await.unwrap().is_some());
    assert!(workflow.available_actions().can_verify_payment);

    workflow.load_order(Some("ord-1002")).await.unwrap();
    assert!(workflow.payment_proof().is_none());
    assert!(!workflow.available_actions().can_verify_payment);

    state.clear_journal();
    let err = workflow
        .verify_payment(VerificationDecision::Verified, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Workflow(WorkflowError::NoPaymentProof)));
    assert!(state.journal().is_empty());
}

#[tokio::test]
async fn test_failed_switch_leaves_no_order_loaded() {
    let (state, api) = common::admin_api();
    state.restrict_order("ord-1003");
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1001")).await.unwrap();
    workflow.load_payment_proof().await.unwrap();

    let err = workflow.load_order(Some("ord-1003")).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert!(workflow.order().is_none());
    assert!(workflow.payment_proof().is_none());
    assert_eq!(workflow.selected_status(), None);

    state.clear_journal();
    let err = workflow.add_admin_note("meant for ord-1003").await.unwrap_err();
    assert!(matches!(err, ClientError::Workflow(WorkflowError::NoOrderLoaded)));
    assert_eq!(state.mutation_count(), 0);

    // the failed id is still the one retried
    let err = workflow.reload().await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert_eq!(state.count("GET", "/orders/ord-1003"), 1);
}

#[tokio::test]
async fn test_status_update_puts_once_then_refetches() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1001")).await.unwrap();
    state.clear_journal();

    let order = workflow
        .update_status(OrderStatus::Shipped, Some("TRK-1"))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.tracking_number.as_deref(), Some("TRK-1"));
    assert_eq!(state.count("PUT", "/orders/ord-1001/status"), 1);
    assert_eq!(state.count("GET", "/orders/ord-1001"), 1);
    assert_eq!(state.journal().len(), 2);
    assert_eq!(workflow.selected_status(), Some(OrderStatus::Shipped));
    assert!(!workflow.is_updating());
}

#[tokio::test]
async fn test_status_update_to_cancelled_is_refused_locally() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1002")).await.unwrap();

    let err = workflow
        .update_status(OrderStatus::Cancelled, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Workflow(WorkflowError::StatusNotAllowed(OrderStatus::Cancelled))
    ));
    assert_eq!(state.mutation_count(), 0);
}

#[tokio::test]
async fn test_terminal_orders_cannot_be_cancelled() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);

    for id in ["ord-1004", "ord-1005"] {
        workflow.load_order(Some(id)).await.unwrap();
        let actions = workflow.available_actions();
        assert!(!actions.can_cancel, "{} should not offer cancel", id);
        assert!(actions.status_targets.is_empty());

        let err = workflow.cancel_order("too late").await.unwrap_err();
        assert!(matches!(err, ClientError::Workflow(WorkflowError::NotCancellable(_))));
    }
    assert_eq!(state.mutation_count(), 0);
}

#[tokio::test]
async fn test_cancel_requires_reason() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1001")).await.unwrap();

    let err = workflow.cancel_order("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::Form(_)));
    assert_eq!(state.mutation_count(), 0);

    let order = workflow.cancel_order("Out of stock").await.unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(order.cancellation_reason.as_deref(), Some("Out of stock"));
}

#[tokio::test]
async fn test_admin_note_is_appended() {
    let (_state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1005")).await.unwrap();

    let order = workflow.add_admin_note("Refund sent via bKash").await.unwrap();

    assert_eq!(order.admin_notes.len(), 1);
    assert_eq!(order.admin_notes[0].note, "Refund sent via bKash");
    assert_eq!(order.admin_notes[0].added_by.as_deref(), Some("admin@shop.test"));
}

#[tokio::test]
async fn test_failed_update_keeps_loaded_order() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1002")).await.unwrap();
    state.fail_next("PUT", "/orders/ord-1002/status", 500, "database unavailable");

    let err = workflow
        .update_status(OrderStatus::Shipped, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Server { status: 500, .. }));
    assert_eq!(
        workflow.order().map(|o| o.status),
        Some(OrderStatus::Processing)
    );
    assert!(!workflow.is_updating());
    assert_eq!(state.count("GET", "/orders/ord-1002"), 1);
}

#[tokio::test]
async fn test_concurrent_update_is_busy() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1001")).await.unwrap();
    state.set_latency(Some(Duration::from_millis(50)));

    let (first, second) = tokio::join!(
        workflow.update_status(OrderStatus::Processing, None),
        workflow.add_admin_note("called the customer"),
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(ClientError::Busy)));
    assert_eq!(state.count("PUT", "/orders/ord-1001/status"), 1);
    assert_eq!(state.count("POST", "/orders/ord-1001/notes"), 0);
}

#[tokio::test]
async fn test_missing_payment_proof_is_none() {
    let (_state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1002")).await.unwrap();

    let proof = workflow.load_payment_proof().await.unwrap();

    assert!(proof.is_none());
    assert!(!workflow.available_actions().can_verify_payment);
}

#[tokio::test]
async fn test_verify_payment_refreshes_order_and_proof() {
    let (state, api) = common::admin_api();
    let workflow = OrderWorkflow::new(&api);
    workflow.load_order(Some("ord-1001")).await.unwrap();
    workflow.load_payment_proof().await.unwrap();
    assert!(workflow.available_actions().can_verify_payment);

    let order = workflow
        .verify_payment(VerificationDecision::Verified, Some("TX matches"))
        .await
        .unwrap();

    assert_eq!(order.payment_status, PaymentStatus::Paid);
    let proof = workflow.payment_proof().unwrap();
    assert_eq!(proof.status, ProofStatus::Verified);
    assert_eq!(proof.admin_notes.as_deref(), Some("TX matches"));
    assert_eq!(state.count("PUT", "/orders/ord-1001/verify-payment"), 1);

    // already reviewed
    let err = workflow
        .verify_payment(VerificationDecision::Rejected, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Workflow(WorkflowError::ProofAlreadyReviewed(ProofStatus::Verified))
    ));
}

#[tokio::test]
async fn test_browser_filters_and_pages() {
    let (state, api) = common::admin_api();
    let browser = OrderBrowser::new(&api);

    let page = browser.fetch().await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 1);

    let page = browser.set_status(Some(OrderStatus::Pending)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "ord-1001");

    let query = state.journal().last().and_then(|r| r.query.clone()).unwrap();
    assert!(query.contains("status=pending"));

    // beyond the last page: no request
    state.clear_journal();
    assert!(browser.go_to_page(2).await.unwrap().is_none());
    assert!(state.journal().is_empty());

    assert!(matches!(
        browser.set_page_size(15).await,
        Err(ClientError::Form(_))
    ));
}

#[tokio::test]
async fn test_browser_search_is_debounced() {
    let (state, api) = common::admin_api();
    let browser = OrderBrowser::with_debouncer(&api, Debouncer::new(Duration::from_millis(20)));

    let (first, second) = tokio::join!(browser.search("ORD-100"), browser.search("ORD-1003"));

    assert!(first.unwrap().is_none());
    let page = second.unwrap().unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(state.count("GET", "/orders/admin/filtered"), 1);
}

use admin_mock::{MockState, router};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(
    state: &MockState,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", path));
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router(state.clone())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn login_issues_token_for_valid_credentials() {
    let state = MockState::seeded();
    let (status, body) = call(
        &state,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "admin@shop.test", "password": "admin123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let state = MockState::seeded();
    let (status, body) = call(
        &state,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "admin@shop.test", "password": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn admin_routes_require_admin_role() {
    let state = MockState::seeded();
    let (status, _) = call(&state, "GET", "/coupons", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let staff = state.token_for("staff@shop.test", 3600);
    let (status, body) = call(&state, "GET", "/coupons", Some(&staff), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied. Admin privileges required.");

    let (status, _) = call(&state, "GET", "/auth/check-profile", Some(&staff), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn filtered_orders_carry_pagination() {
    let state = MockState::seeded();
    let token = state.admin_token();
    let (status, body) = call(
        &state,
        "GET",
        "/orders/admin/filtered?page=1&limit=2&status=pending",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orders"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn terminal_order_rejects_status_change() {
    let state = MockState::seeded();
    let token = state.admin_token();
    let (status, _) = call(
        &state,
        "PUT",
        "/orders/ord-1004/status",
        Some(&token),
        Some(json!({ "status": "shipped" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        state.order("ord-1004").map(|o| o.status.as_str()),
        Some("delivered")
    );
}

#[tokio::test]
async fn journal_records_api_relative_paths() {
    let state = MockState::seeded();
    let token = state.admin_token();
    call(&state, "GET", "/refunds", Some(&token), None).await;
    call(&state, "GET", "/refunds", Some(&token), None).await;

    assert_eq!(state.count("GET", "/refunds"), 2);
    assert_eq!(state.mutation_count(), 0);
}

#[tokio::test]
async fn injected_failure_fires_once() {
    let state = MockState::seeded();
    let token = state.admin_token();
    state.fail_next("GET", "/customers", 500, "boom");

    let (status, body) = call(&state, "GET", "/customers", Some(&token), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "boom");

    let (status, _) = call(&state, "GET", "/customers", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

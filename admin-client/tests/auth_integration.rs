// admin-client/tests/auth_integration.rs
// Sign-in gate and session persistence

mod common;

use admin_client::{AuthGate, ClientError, Session, SessionStore};
use admin_client::session::StoredSession;
use admin_mock::MockState;
use shared::forms::LoginForm;
use tempfile::TempDir;

#[tokio::test]
async fn test_admin_login_sets_session_and_store() {
    let state = MockState::seeded();
    let api = common::api_for(&state, Session::new());
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    let gate = AuthGate::new(&api).with_store(store.clone());

    let user = gate
        .login(&LoginForm::new("admin@shop.test", "admin123"))
        .await
        .unwrap();

    assert_eq!(user.email, "admin@shop.test");
    assert!(api.session().is_admin());
    assert!(api.session().token().is_some());
    assert_eq!(gate.require_admin().unwrap().id, "u-1");

    let saved = store.load().unwrap();
    assert_eq!(Some(saved.token), api.session().token());
}

#[tokio::test]
async fn test_non_admin_login_is_forbidden() {
    let state = MockState::seeded();
    let api = common::api_for(&state, Session::new());
    let gate = AuthGate::new(&api);

    let err = gate
        .login(&LoginForm::new("staff@shop.test", "staff123"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Forbidden(m) if m == "Access denied. Admin privileges required."));
    assert!(api.session().token().is_none());
    assert!(gate.require_admin().is_err());
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let state = MockState::seeded();
    let api = common::api_for(&state, Session::new());

    let err = AuthGate::new(&api)
        .login(&LoginForm::new("admin@shop.test", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
}

#[tokio::test]
async fn test_blank_login_sends_nothing() {
    let state = MockState::seeded();
    let api = common::api_for(&state, Session::new());

    let err = AuthGate::new(&api)
        .login(&LoginForm::new("", "admin123"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Form(_)));
    assert!(state.journal().is_empty());
}

#[tokio::test]
async fn test_restore_valid_stored_token() {
    let state = MockState::seeded();
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    store.save(&StoredSession::new(state.admin_token(), None)).unwrap();

    let api = common::api_for(&state, Session::new());
    let user = AuthGate::new(&api)
        .with_store(store.clone())
        .restore()
        .await
        .unwrap();

    assert_eq!(user.map(|u| u.email).as_deref(), Some("admin@shop.test"));
    assert_eq!(state.count("GET", "/auth/check-profile"), 1);
    assert!(store.exists());
}

#[tokio::test]
async fn test_restore_expired_token_skips_request() {
    let state = MockState::seeded();
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    let expired = state.token_for("admin@shop.test", -3600);
    store.save(&StoredSession::new(expired, None)).unwrap();

    let api = common::api_for(&state, Session::new());
    let user = AuthGate::new(&api)
        .with_store(store.clone())
        .restore()
        .await
        .unwrap();

    assert!(user.is_none());
    assert!(state.journal().is_empty());
    assert!(!store.exists());
}

#[tokio::test]
async fn test_restore_non_admin_token_clears_session() {
    let state = MockState::seeded();
    let staff = state.token_for("staff@shop.test", 3600);
    let api = common::api_for(&state, Session::with_token(staff));

    let user = AuthGate::new(&api).restore().await.unwrap();

    assert!(user.is_none());
    assert!(api.session().token().is_none());
}

#[tokio::test]
async fn test_logout_clears_store() {
    let state = MockState::seeded();
    let dir = TempDir::new().unwrap();
    let store = SessionStore::in_dir(dir.path());
    let api = common::api_for(&state, Session::new());
    let gate = AuthGate::new(&api).with_store(store.clone());
    gate.login(&LoginForm::new("admin@shop.test", "admin123"))
        .await
        .unwrap();
    assert!(store.exists());

    gate.logout().unwrap();

    assert!(!store.exists());
    assert!(api.session().token().is_none());
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let state = MockState::seeded();
    let api = common::api_for(&state, Session::new());

    let err = api.coupons().list().await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
}

#![allow(dead_code)]

use admin_client::{AdminApi, OneshotHttpClient, Session};
use admin_mock::{MockState, router};

/// Seeded mock plus an API client already signed in as the admin.
pub fn admin_api() -> (MockState, AdminApi<OneshotHttpClient>) {
    let state = MockState::seeded();
    let session = Session::with_token(state.admin_token());
    (state.clone(), api_for(&state, session))
}

pub fn api_for(state: &MockState, session: Session) -> AdminApi<OneshotHttpClient> {
    AdminApi::new(OneshotHttpClient::new(router(state.clone()), session))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("admin_client=debug")
        .with_test_writer()
        .try_init();
}

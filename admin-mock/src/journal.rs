//! Request journal middleware
//!
//! Records every request before it is handled, then applies the test hooks:
//! artificial latency first, then a one-shot injected failure if one matches.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::API_PREFIX;
use crate::error::MockError;
use crate::state::MockState;

/// One request as seen by the mock, path relative to [`API_PREFIX`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

impl RecordedRequest {
    pub fn is(&self, method: &str, path: &str) -> bool {
        self.method.eq_ignore_ascii_case(method) && self.path == path
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InjectedFailure {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub message: String,
}

pub async fn record(State(state): State<MockState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_string();
    let full_path = req.uri().path();
    let path = full_path
        .strip_prefix(API_PREFIX)
        .unwrap_or(full_path)
        .to_string();
    let query = req.uri().query().map(str::to_string);

    tracing::debug!(%method, %path, "mock request");
    state.record(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
    });

    if let Some(delay) = state.latency() {
        tokio::time::sleep(delay).await;
    }

    if let Some(failure) = state.take_failure(&method, &path) {
        tracing::info!(%method, %path, status = failure.status, "injected failure");
        return MockError::Status {
            status: failure.status,
            message: failure.message,
        }
        .into_response();
    }

    next.run(req).await
}

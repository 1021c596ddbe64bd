// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::{HttpClient, decode_body};
use crate::session::Session;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory)
///
/// Calls an axum [`Router`] directly through tower's `oneshot`, with no
/// socket in between. Used by the integration tests against the mock API.
///
/// ```ignore
/// let router = admin_mock::router(admin_mock::MockState::seeded());
/// let client = OneshotHttpClient::new(router, Session::new());
/// let orders: serde_json::Value = client.get("/orders").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    prefix: String,
    session: Session,
}

impl OneshotHttpClient {
    /// Routes are expected under `/api/v1`, like the real backend.
    pub fn new(router: Router, session: Session) -> Self {
        Self {
            router,
            prefix: "/api/v1".to_string(),
            session,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    fn uri(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }

    fn build_request(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(self.uri(path));
        if let Some(auth) = self.session.bearer() {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status().as_u16();
        tracing::debug!(%method, path = %path, status, "admin api request (in-process)");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;
        decode_body(status, &bytes)
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(method, path, Some(bytes))?;
        self.execute(request).await
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(Method::POST, path, body).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(Method::PUT, path, body).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(Method::PATCH, path, body).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::get;

    #[tokio::test]
    async fn test_prefix_and_bearer() {
        let router = Router::new().route(
            "/api/v1/echo",
            get(|headers: http::HeaderMap| async move {
                let auth = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(serde_json::json!({ "auth": auth }))
            }),
        );
        let client = OneshotHttpClient::new(router, Session::with_token("t0k"));
        let value: serde_json::Value = client.get("/echo").await.unwrap();
        assert_eq!(value["auth"], "Bearer t0k");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new(), Session::new());
        let err = client.get::<serde_json::Value>("/missing").await.unwrap_err();
        assert!(err.is_not_found());
    }
}

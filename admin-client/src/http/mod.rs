//! HTTP transport
//!
//! [`HttpClient`] is the seam between the admin logic and the wire. Paths are
//! relative to the API base (`/orders/42`, not `/api/v1/orders/42`); every
//! request carries the session's bearer token when one is held.

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkHttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ApiStatus;

use crate::session::Session;
use crate::{ClientError, ClientResult};

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// Session whose token authenticates requests
    fn session(&self) -> &Session;
}

/// Turn a status and body into a typed result.
///
/// Empty 2xx bodies decode as JSON `null`, so `()` and
/// `Option<_>`/`serde_json::Value` targets accept a 204.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, bytes: &[u8]) -> ClientResult<T> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(bytes);
        return Err(ClientError::from_status(
            status,
            ApiStatus::message_from_body(&text),
        ));
    }
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    serde_json::from_slice(bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

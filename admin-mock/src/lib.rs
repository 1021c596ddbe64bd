//! In-memory storefront admin API
//!
//! An axum implementation of the REST endpoints the admin client talks to,
//! backed by a seeded in-memory store. Every request is recorded in a
//! journal so tests can assert exactly which calls were made. The response
//! shapes deliberately differ between resources (bare arrays, `{ data }`,
//! resource keys) the way the real backend's do.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod journal;
pub mod state;

pub use api::router;
pub use config::MockConfig;
pub use error::MockError;
pub use journal::RecordedRequest;
pub use state::{MockState, Store};

/// Every route is served under this prefix
pub const API_PREFIX: &str = "/api/v1";

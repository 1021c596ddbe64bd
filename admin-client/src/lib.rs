//! Admin Client - typed client for the storefront admin API
//!
//! Layers, bottom to top:
//! - [`http`]: the [`HttpClient`] transport trait with a reqwest
//!   implementation and (feature `in-process`) an axum oneshot one;
//! - [`api`]: typed resource APIs returning normalized records;
//! - [`auth`], [`orders`], [`screens`]: the admin workflows built on top.
//!
//! ```ignore
//! let session = Session::new();
//! let http = NetworkHttpClient::new(&ClientConfig::default(), session)?;
//! let api = AdminApi::new(http);
//! AuthGate::new(&api).login(&LoginForm::new(email, password)).await?;
//!
//! let workflow = OrderWorkflow::new(&api);
//! workflow.load_order(Some("ord-1001")).await?;
//! workflow.update_status(OrderStatus::Shipped, Some("TRK-1")).await?;
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod list;
pub mod orders;
pub mod screens;
pub mod session;

pub use api::AdminApi;
pub use auth::AuthGate;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use self::http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use self::http::OneshotHttpClient;
pub use list::{DeleteOutcome, Debouncer, ListView};
pub use orders::{OrderBrowser, OrderWorkflow};
pub use screens::{Notice, NoticeLevel};
pub use session::{Session, SessionStore};

//! Shared types for the storefront admin
//!
//! Domain records, order/payment state rules, response-shape normalization,
//! list filtering and pagination, form validation and reports. Everything in
//! here is pure: no I/O, no async.

pub mod client;
pub mod envelope;
pub mod forms;
pub mod listing;
pub mod models;
pub mod order;
pub mod report;
pub mod response;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use envelope::EnvelopeError;
pub use listing::{ListFilter, Listable, OrderQuery, Page};
pub use order::{OrderActions, WorkflowError};
pub use validation::FormError;

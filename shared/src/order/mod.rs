//! Order lifecycle rules
//!
//! The backend owns the order state machine; this module holds the subset the
//! admin UI enforces before sending a request:
//!
//! ```text
//! pending -> processing -> shipped -> delivered
//!    \___________\_____________\______> cancelled
//! ```
//!
//! Steps may be skipped. `delivered` and `cancelled` are terminal. Payment
//! verification is tracked separately and never reconciled with the order
//! status on the client.

mod rules;

pub use rules::{
    OrderActions, STATUS_UPDATE_TARGETS, WorkflowError, check_cancel, check_status_update,
    check_verification,
};

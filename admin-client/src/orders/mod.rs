//! Order administration
//!
//! [`OrderWorkflow`] drives a single order's detail view; [`OrderBrowser`]
//! drives the server-filtered order list.

mod browser;
mod workflow;

pub use browser::OrderBrowser;
pub use workflow::OrderWorkflow;

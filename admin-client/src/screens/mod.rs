//! Screen controllers
//!
//! One controller per admin screen. A controller owns the screen's cached
//! list, validates forms before sending anything, and reports outcomes as
//! [`Notice`]s; failures come back as [`ClientError`]s whose
//! [`user_message`](ClientError::user_message) is the server's text.

mod catalog;
mod coupons;
mod people;
mod refunds;
pub mod reports;
mod settings;

pub use catalog::{CategoryScreen, ProductScreen, SubcategoryScreen};
pub use coupons::CouponScreen;
pub use people::{CustomerScreen, MessageScreen};
pub use refunds::RefundScreen;
pub use settings::DeliveryCostScreen;

use std::fmt;

use crate::ClientError;
use crate::list::DeleteOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Outcome message shown to the admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn from_error(err: &ClientError) -> Self {
        Self::error(err.user_message())
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// `Ok(notice)` or the error as a notice.
impl From<Result<Notice, ClientError>> for Notice {
    fn from(result: Result<Notice, ClientError>) -> Self {
        result.unwrap_or_else(|e| Notice::from_error(&e))
    }
}

pub(crate) fn delete_notice(outcome: DeleteOutcome, what: &str) -> Notice {
    match outcome {
        DeleteOutcome::Deleted => Notice::success(format!("{} deleted", what)),
        DeleteOutcome::AlreadyGone => Notice::info(format!("{} not found, removed from list", what)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_from_result() {
        let notice: Notice = Err(ClientError::Validation("Coupon code already exists".into())).into();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Coupon code already exists");
        assert_eq!(notice.to_string(), "[error] Coupon code already exists");

        let notice = delete_notice(DeleteOutcome::AlreadyGone, "Category");
        assert_eq!(notice, Notice::info("Category not found, removed from list"));
    }
}

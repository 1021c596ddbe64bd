//! Input validation helpers
//!
//! Form checks run before any request is sent; a failing form never reaches
//! the network. Limits are UX limits, the backend stays authoritative.

use chrono::NaiveDate;
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, category, subcategory, customer
pub const MAX_NAME_LEN: usize = 200;

/// Coupon codes, tracking numbers
pub const MAX_CODE_LEN: usize = 64;

/// Notes, replies, cancellation reasons, descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Maximum number of categories the storefront menu supports
pub const MAX_CATEGORIES: usize = 12;

/// Client-side form validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} must be a number, got '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be greater than {min} and at most {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be a whole number, got '{value}'")]
    NotInteger { field: &'static str, value: String },

    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },

    #[error("at least one {what} is required")]
    Missing { what: &'static str },

    #[error("at most {max} {what} are allowed")]
    LimitReached { what: &'static str, max: usize },
}

// ── Validation helpers ──────────────────────────────────────────────

/// Required text: non-empty after trimming and within the length limit.
/// Returns the trimmed value.
pub fn required_text(value: &str, field: &'static str, max_len: usize) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required { field });
    }
    if trimmed.chars().count() > max_len {
        return Err(FormError::TooLong {
            field,
            len: trimmed.chars().count(),
            max: max_len,
        });
    }
    Ok(trimmed.to_string())
}

/// Optional text: blank becomes `None`, otherwise length-checked and trimmed.
pub fn optional_text(
    value: Option<&str>,
    field: &'static str,
    max_len: usize,
) -> Result<Option<String>, FormError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => required_text(v, field, max_len).map(Some),
        None => Ok(None),
    }
}

/// Required numeric input.
pub fn number(value: &str, field: &'static str) -> Result<f64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required { field });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormError::NotNumeric {
            field,
            value: trimmed.to_string(),
        })
}

/// Required number that must be `>= 0`.
pub fn non_negative(value: &str, field: &'static str) -> Result<f64, FormError> {
    let n = number(value, field)?;
    if n < 0.0 {
        return Err(FormError::Negative { field });
    }
    Ok(n)
}

/// Optional whole number that must be `>= 0`; blank means not given.
pub fn optional_count(value: &str, field: &'static str) -> Result<Option<u32>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let n = number(trimmed, field)?;
    if n < 0.0 {
        return Err(FormError::Negative { field });
    }
    if n.fract() != 0.0 || n > u32::MAX as f64 {
        return Err(FormError::NotInteger {
            field,
            value: trimmed.to_string(),
        });
    }
    Ok(Some(n as u32))
}

/// Required `YYYY-MM-DD` date.
pub fn date(value: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required { field });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: trimmed.to_string(),
    })
}

/// Required email: a local part, `@`, and a domain part.
pub fn email(value: &str, field: &'static str) -> Result<String, FormError> {
    let email = required_text(value, field, MAX_EMAIL_LEN)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(FormError::InvalidEmail { field }),
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("  Men ", "title", MAX_NAME_LEN).unwrap(), "Men");
        assert_eq!(
            required_text("   ", "title", MAX_NAME_LEN),
            Err(FormError::Required { field: "title" })
        );
        assert!(matches!(
            required_text("abcdef", "code", 5),
            Err(FormError::TooLong { len: 6, max: 5, .. })
        ));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(number(" 12.5 ", "price").unwrap(), 12.5);
        assert!(matches!(number("12a", "price"), Err(FormError::NotNumeric { .. })));
        assert!(matches!(number("NaN", "price"), Err(FormError::NotNumeric { .. })));
        assert_eq!(non_negative("-1", "price"), Err(FormError::Negative { field: "price" }));
        assert_eq!(optional_count("", "stock").unwrap(), None);
        assert_eq!(optional_count("7", "stock").unwrap(), Some(7));
        assert!(matches!(optional_count("2.5", "stock"), Err(FormError::NotInteger { .. })));
    }

    #[test]
    fn test_date_and_email() {
        assert!(date("2025-02-28", "expiry").is_ok());
        assert!(matches!(date("2025-02-30", "expiry"), Err(FormError::InvalidDate { .. })));
        assert!(matches!(date("28/02/2025", "expiry"), Err(FormError::InvalidDate { .. })));

        assert_eq!(email("a@b.com", "email").unwrap(), "a@b.com");
        assert_eq!(email("nobody", "email"), Err(FormError::InvalidEmail { field: "email" }));
        assert_eq!(email("@b.com", "email"), Err(FormError::InvalidEmail { field: "email" }));
    }

    #[test]
    fn test_split_items() {
        assert_eq!(split_items(" Shirts, Pants,, ,Panjabi "), vec!["Shirts", "Pants", "Panjabi"]);
        assert!(split_items("").is_empty());
    }
}

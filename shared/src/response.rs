//! API Response types
//!
//! The storefront backend wraps results in a loose `{ success, message, ... }`
//! object. Resource payloads are unwrapped by [`crate::envelope`]; this module
//! covers the status part.

use serde::{Deserialize, Serialize};

/// Status portion of a backend response
///
/// ```json
/// { "success": false, "message": "Category not found" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiStatus {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Extract the human-readable message from an error body.
    ///
    /// JSON objects yield their `message` (or `error`) field; non-JSON bodies
    /// yield the trimmed raw text, `None` when empty.
    pub fn message_from_body(body: &str) -> Option<String> {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string),
            Ok(serde_json::Value::String(text)) => Some(text),
            _ => {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            ApiStatus::message_from_body(r#"{"success":false,"message":"Coupon code exists"}"#)
                .as_deref(),
            Some("Coupon code exists")
        );
        assert_eq!(
            ApiStatus::message_from_body(r#"{"error":"bad token"}"#).as_deref(),
            Some("bad token")
        );
        assert_eq!(
            ApiStatus::message_from_body("Bad Gateway\n").as_deref(),
            Some("Bad Gateway")
        );
        assert_eq!(ApiStatus::message_from_body(r#"{"success":false}"#), None);
        assert_eq!(ApiStatus::message_from_body(""), None);
    }
}

//! Client error types

use shared::{EnvelopeError, FormError, WorkflowError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 401, or no admin session held
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// 403
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 / 422, or a 2xx body with `success: false`
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Form rejected before sending
    #[error("Invalid input: {0}")]
    Form(#[from] FormError),

    /// Action not available for the current order state
    #[error("Action not available: {0}")]
    Workflow(#[from] WorkflowError),

    /// Another mutating action is still in flight
    #[error("Another update is in progress")]
    Busy,

    /// Session persistence failure
    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Build the error for a non-2xx response.
    ///
    /// `message` is the body's `message` field when present; the status line
    /// is used otherwise.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| default_reason(status).to_string());
        match status {
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            400 | 422 => ClientError::Validation(message),
            _ => ClientError::Server { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    /// Errors raised before any request was sent.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ClientError::Form(_) | ClientError::Workflow(_) | ClientError::Busy
        )
    }

    /// Text to show the admin: the server's message verbatim where there is one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized(m)
            | ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::Validation(m)
            | ClientError::Server { message: m, .. } => m.clone(),
            other => other.to_string(),
        }
    }
}

fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        422 => "Unprocessable entity",
        500 => "Internal server error",
        502 => "Bad gateway",
        503 => "Service unavailable",
        _ => "Request failed",
    }
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected(message) => ClientError::Validation(message),
            EnvelopeError::Json(e) => ClientError::InvalidResponse(e.to_string()),
            other => ClientError::InvalidResponse(other.to_string()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ClientError::from_status(403, Some("Access denied".into())),
            ClientError::Forbidden(m) if m == "Access denied"
        ));
        assert!(ClientError::from_status(404, None).is_not_found());
        assert!(matches!(
            ClientError::from_status(422, Some("bad".into())),
            ClientError::Validation(_)
        ));
        let err = ClientError::from_status(503, None);
        assert!(matches!(err, ClientError::Server { status: 503, .. }));
        assert_eq!(err.user_message(), "Service unavailable");
    }

    #[test]
    fn test_client_side_errors() {
        assert!(ClientError::Busy.is_client_side());
        assert!(ClientError::from(FormError::Required { field: "code" }).is_client_side());
        assert!(!ClientError::from_status(500, None).is_client_side());
    }
}

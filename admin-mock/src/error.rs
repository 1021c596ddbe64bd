//! Mock API errors, rendered as `{ success: false, message }`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::WorkflowError;
use shared::response::ApiStatus;

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// Arbitrary status, used for injected failures
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl MockError {
    pub fn not_found(what: &str, id: &str) -> Self {
        MockError::NotFound(format!("{} {} not found", what, id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MockError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            MockError::Forbidden(_) => StatusCode::FORBIDDEN,
            MockError::NotFound(_) => StatusCode::NOT_FOUND,
            MockError::Validation(_) => StatusCode::BAD_REQUEST,
            MockError::Status { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "mock request failed");
        }
        (status, Json(ApiStatus::error(self.to_string()))).into_response()
    }
}

/// Order rule violations are plain 400s.
impl From<WorkflowError> for MockError {
    fn from(e: WorkflowError) -> Self {
        MockError::Validation(e.to_string())
    }
}

pub type MockResult<T> = Result<T, MockError>;

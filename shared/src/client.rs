//! Auth request/response types shared between the mock API and the client

use serde::{Deserialize, Serialize};

use crate::models::AdminUser;

/// POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of POST /auth/login and GET /auth/check-profile
///
/// ```json
/// { "success": true, "token": "eyJ...", "user": { "id": "u1", "role": "admin", ... } }
/// ```
/// `token` is absent on the profile check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

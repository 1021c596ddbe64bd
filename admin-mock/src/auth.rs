//! HS256 tokens and the admin guard

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::models::AdminUser;

use crate::error::MockError;
use crate::state::MockState;

/// Issued tokens live one day
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

pub const ADMIN_REQUIRED: &str = "Access denied. Admin privileges required.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == shared::models::ADMIN_ROLE
    }
}

pub fn issue_token(
    secret: &str,
    user: &AdminUser,
    exp: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(secret: &str, token: &str) -> Result<Claims, MockError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            MockError::Unauthorized("Token expired".into())
        }
        _ => MockError::Unauthorized("Invalid token".into()),
    })
}

/// Claims of the caller, for routes that accept any signed-in user.
pub fn claims_from_request(state: &MockState, req: &Request) -> Result<Claims, MockError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| MockError::Unauthorized("Not authorized, no token".into()))?;
    verify_token(state.jwt_secret(), token)
}

/// Signed-in user of any role; inserts [`Claims`] into the request extensions.
pub async fn require_user(
    State(state): State<MockState>,
    mut req: Request,
    next: Next,
) -> Result<Response, MockError> {
    let claims = claims_from_request(&state, &req)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Signed-in admin.
pub async fn require_admin(
    State(state): State<MockState>,
    mut req: Request,
    next: Next,
) -> Result<Response, MockError> {
    let claims = claims_from_request(&state, &req)?;
    if !claims.is_admin() {
        tracing::warn!(user = %claims.email, "non-admin rejected");
        return Err(MockError::Forbidden(ADMIN_REQUIRED.into()));
    }
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminUser {
        AdminUser {
            id: "u-1".into(),
            name: "Admin".into(),
            email: "admin@shop.test".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let exp = chrono::Utc::now().timestamp() + 60;
        let token = issue_token("secret", &admin(), exp).unwrap();
        let claims = verify_token("secret", &token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert!(claims.is_admin());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let exp = chrono::Utc::now().timestamp() + 60;
        let token = issue_token("secret", &admin(), exp).unwrap();
        assert!(matches!(
            verify_token("other", &token),
            Err(MockError::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let exp = chrono::Utc::now().timestamp() - 120;
        let token = issue_token("secret", &admin(), exp).unwrap();
        let err = verify_token("secret", &token).unwrap_err();
        assert_eq!(err.to_string(), "Token expired");
    }
}

//! Admin authentication gate
//!
//! Only users whose role is `admin` may use the client. The gate writes the
//! shared [`Session`](crate::session::Session) and, when configured, mirrors
//! it to a [`SessionStore`] so a later run can restore it.

use shared::forms::LoginForm;
use shared::models::AdminUser;
use tracing::{info, warn};

use crate::api::AdminApi;
use crate::http::HttpClient;
use crate::session::{SessionStore, StoredSession, is_token_expired, now_secs};
use crate::{ClientError, ClientResult};

pub const ADMIN_REQUIRED: &str = "Access denied. Admin privileges required.";

pub struct AuthGate<'a, C> {
    api: &'a AdminApi<C>,
    store: Option<SessionStore>,
}

impl<'a, C: HttpClient> AuthGate<'a, C> {
    pub fn new(api: &'a AdminApi<C>) -> Self {
        Self { api, store: None }
    }

    pub fn with_store(mut self, store: SessionStore) -> Self {
        self.store = Some(store);
        self
    }

    /// POST /auth/login; accepts the session only for an admin user.
    pub async fn login(&self, form: &LoginForm) -> ClientResult<AdminUser> {
        let request = form.validate()?;
        let response = self.api.auth().login(&request).await?;
        if !response.success {
            return Err(ClientError::Unauthorized(
                response.message.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }
        let user = response
            .user
            .ok_or_else(|| ClientError::InvalidResponse("Missing user in login response".into()))?;
        if !user.is_admin() {
            warn!(email = %user.email, role = %user.role, "non-admin login rejected");
            return Err(ClientError::Forbidden(ADMIN_REQUIRED.to_string()));
        }
        let token = response
            .token
            .ok_or_else(|| ClientError::InvalidResponse("Missing token in login response".into()))?;

        self.api.session().set(token.clone(), user.clone());
        if let Some(store) = &self.store {
            store.save(&StoredSession::new(token, Some(user.clone())))?;
        }
        info!(email = %user.email, "admin logged in");
        Ok(user)
    }

    /// Restore a session from the session handle or the store.
    ///
    /// Expired tokens are discarded without a request. Otherwise the token is
    /// checked with GET /auth/check-profile and kept only for an admin profile.
    /// Any rejection clears the session and yields `Ok(None)`; transport
    /// failures clear it too but are returned as errors.
    pub async fn restore(&self) -> ClientResult<Option<AdminUser>> {
        let session = self.api.session();
        let token = match session
            .token()
            .or_else(|| self.store.as_ref().and_then(|s| s.load()).map(|s| s.token))
        {
            Some(token) => token,
            None => return Ok(None),
        };

        if is_token_expired(&token, now_secs()) {
            info!("stored admin token expired");
            self.clear()?;
            return Ok(None);
        }

        session.set_token(token.clone());
        match self.api.auth().check_profile().await {
            Ok(response) if response.success => match response.user {
                Some(user) if user.is_admin() => {
                    session.set(token, user.clone());
                    Ok(Some(user))
                }
                _ => {
                    warn!("restored token does not belong to an admin");
                    self.clear()?;
                    Ok(None)
                }
            },
            Ok(_) | Err(ClientError::Unauthorized(_)) | Err(ClientError::Forbidden(_)) => {
                self.clear()?;
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "profile check failed");
                self.clear()?;
                Err(e)
            }
        }
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.clear()?;
        info!("admin logged out");
        Ok(())
    }

    /// The current admin, or `Unauthorized`.
    pub fn require_admin(&self) -> ClientResult<AdminUser> {
        let session = self.api.session();
        match session.user() {
            Some(user) if session.is_admin() => Ok(user),
            _ => Err(ClientError::Unauthorized(ADMIN_REQUIRED.to_string())),
        }
    }

    fn clear(&self) -> ClientResult<()> {
        self.api.session().clear();
        if let Some(store) = &self.store {
            store.delete()?;
        }
        Ok(())
    }
}

//! Admin session
//!
//! [`Session`] is the explicitly injected replacement for a global token:
//! one handle is shared by the transport (which reads the bearer token) and
//! the [`AuthGate`](crate::auth::AuthGate) (which writes it). [`SessionStore`]
//! persists the token between runs as a small JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use shared::models::AdminUser;

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<AdminUser>,
}

/// Shared, cloneable session handle
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session holding a token whose user is not known yet.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<AdminUser> {
        self.read().user.clone()
    }

    /// `Authorization` header value, if a token is held.
    pub fn bearer(&self) -> Option<String> {
        self.read().token.as_ref().map(|t| format!("Bearer {}", t))
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let mut state = self.write();
        state.token = Some(token.into());
        state.user = None;
    }

    pub fn set(&self, token: impl Into<String>, user: AdminUser) {
        let mut state = self.write();
        state.token = Some(token.into());
        state.user = Some(user);
    }

    pub fn clear(&self) {
        *self.write() = SessionState::default();
    }

    /// A token is held and its user was confirmed as an admin.
    pub fn is_admin(&self) -> bool {
        let state = self.read();
        state.token.is_some() && state.user.as_ref().is_some_and(AdminUser::is_admin)
    }
}

/// Read the `exp` claim of a JWT without verifying it.
pub fn token_expiry(token: &str) -> Option<u64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

/// Tokens without a readable `exp` are left for the server to judge.
pub fn is_token_expired(token: &str, now: u64) -> bool {
    token_expiry(token).is_some_and(|exp| now >= exp)
}

pub fn now_secs() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}

/// Persisted session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<AdminUser>,
    /// Unix seconds
    pub saved_at: u64,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, user: Option<AdminUser>) -> Self {
        Self {
            token: token.into(),
            user,
            saved_at: now_secs(),
        }
    }
}

/// JSON file holding the last admin session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub const DEFAULT_FILENAME: &'static str = "admin-session.json";

    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    pub fn in_dir(base_path: impl Into<PathBuf>) -> Self {
        Self::new(base_path, Self::DEFAULT_FILENAME)
    }

    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, session: &StoredSession) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Missing or unreadable files yield `None`.
    pub fn load(&self) -> Option<StoredSession> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    fn admin() -> AdminUser {
        AdminUser {
            id: "u1".into(),
            name: "Admin".into(),
            email: "admin@shop.test".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn test_token_expiry() {
        let token = jwt_with(r#"{"sub":"u1","exp":1700000000}"#);
        assert_eq!(token_expiry(&token), Some(1_700_000_000));
        assert!(is_token_expired(&token, 1_700_000_000));
        assert!(!is_token_expired(&token, 1_699_999_999));

        assert_eq!(token_expiry("not-a-jwt"), None);
        assert!(!is_token_expired("not-a-jwt", u64::MAX));
    }

    #[test]
    fn test_session_handle_is_shared() {
        let session = Session::new();
        let transport_view = session.clone();
        assert!(transport_view.bearer().is_none());

        session.set("abc", admin());
        assert_eq!(transport_view.bearer().as_deref(), Some("Bearer abc"));
        assert!(transport_view.is_admin());

        session.set_token("def");
        assert!(!transport_view.is_admin());

        session.clear();
        assert!(transport_view.token().is_none());
    }

    #[test]
    fn test_store_roundtrip_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested"), "session.json");
        assert!(store.load().is_none());

        store.save(&StoredSession::new("tok", Some(admin()))).unwrap();
        assert!(store.exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok");
        assert_eq!(loaded.user.unwrap().email, "admin@shop.test");

        store.delete().unwrap();
        assert!(!store.exists());
        store.delete().unwrap();
    }

    #[test]
    fn test_corrupt_store_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_none());
    }
}

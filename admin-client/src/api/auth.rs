use shared::client::{AuthResponse, LoginRequest};

use crate::ClientResult;
use crate::http::HttpClient;

pub struct AuthApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.http.post("/auth/login", request).await
    }

    /// GET /auth/check-profile, authenticated with the session token
    pub async fn check_profile(&self) -> ClientResult<AuthResponse> {
        self.http.get("/auth/check-profile").await
    }
}

//! Typed resource APIs
//!
//! One accessor per backend resource. Every method returns normalized
//! records: response-shape differences between endpoints are absorbed here
//! through [`shared::envelope`].

mod auth;
mod catalog;
mod coupons;
mod orders;
mod people;
mod refunds;
mod settings;

pub use auth::AuthApi;
pub use catalog::{CategoriesApi, ProductsApi, SubcategoriesApi};
pub use coupons::CouponsApi;
pub use orders::OrdersApi;
pub use people::{CustomersApi, MessagesApi};
pub use refunds::RefundsApi;
pub use settings::SettingsApi;

use std::borrow::Cow;

use serde_json::Value;

use crate::http::HttpClient;
use crate::session::Session;
use crate::{ClientError, ClientResult};

/// Entry point to the storefront admin API
#[derive(Debug, Clone)]
pub struct AdminApi<C> {
    http: C,
}

impl<C: HttpClient> AdminApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(&self.http)
    }

    pub fn orders(&self) -> OrdersApi<'_, C> {
        OrdersApi::new(&self.http)
    }

    pub fn products(&self) -> ProductsApi<'_, C> {
        ProductsApi::new(&self.http)
    }

    pub fn categories(&self) -> CategoriesApi<'_, C> {
        CategoriesApi::new(&self.http)
    }

    pub fn subcategories(&self) -> SubcategoriesApi<'_, C> {
        SubcategoriesApi::new(&self.http)
    }

    pub fn coupons(&self) -> CouponsApi<'_, C> {
        CouponsApi::new(&self.http)
    }

    pub fn customers(&self) -> CustomersApi<'_, C> {
        CustomersApi::new(&self.http)
    }

    pub fn messages(&self) -> MessagesApi<'_, C> {
        MessagesApi::new(&self.http)
    }

    pub fn refunds(&self) -> RefundsApi<'_, C> {
        RefundsApi::new(&self.http)
    }

    pub fn settings(&self) -> SettingsApi<'_, C> {
        SettingsApi::new(&self.http)
    }
}

/// Percent-encode an id for use as a path segment.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Accept any 2xx body except an explicit `success: false`.
pub(crate) fn expect_ack(value: Value) -> ClientResult<()> {
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request was not successful");
        return Err(ClientError::Validation(message.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("ord-1001"), "ord-1001");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_ack() {
        expect_ack(Value::Null).unwrap();
        expect_ack(json!({ "success": true })).unwrap();
        let err = expect_ack(json!({ "success": false, "message": "nope" })).unwrap_err();
        assert_eq!(err.user_message(), "nope");
    }
}

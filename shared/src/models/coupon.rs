//! Coupon Model

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Coupon entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub code: String,
    /// Percentage off, in (0, 100]
    pub discount: f64,
    /// `YYYY-MM-DD`
    pub expiry: String,
    #[serde(default)]
    pub active: bool,
}

/// Create/update coupon payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponDraft {
    pub code: String,
    pub discount: f64,
    pub expiry: String,
    pub active: bool,
}

impl CouponDraft {
    pub fn into_coupon(self, id: impl Into<String>) -> Coupon {
        Coupon {
            id: id.into(),
            code: self.code,
            discount: self.discount,
            expiry: self.expiry,
            active: self.active,
        }
    }
}

//! Refund request Model

use serde::{Deserialize, Serialize};

use super::id::{deserialize_id, deserialize_opt_id};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

super::wire_enum!(RefundStatus, "refund status", {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

/// Refund request raised against an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: RefundStatus,
}

/// PATCH /refunds/{id}
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefundDecision {
    pub status: RefundStatus,
}

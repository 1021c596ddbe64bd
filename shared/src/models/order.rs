//! Order Model

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;
use super::payment::VerificationDecision;

/// Fulfillment status of an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

super::wire_enum!(OrderStatus, "order status", {
    Pending => "pending",
    Processing => "processing",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

impl OrderStatus {
    /// Delivered and cancelled orders no longer move.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Payment status of an order, tracked independently of [`OrderStatus`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

super::wire_enum!(PaymentStatus, "payment status", {
    Pending => "pending",
    Paid => "paid",
    Failed => "failed",
    Refunded => "refunded",
});

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_cost: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    /// Append-only
    #[serde(default)]
    pub admin_notes: Vec<AdminNote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    /// Customer display name or email, when the backend denormalizes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Order {
    /// Name shown in order lists.
    pub fn customer_label(&self) -> &str {
        self.customer
            .as_deref()
            .or_else(|| self.shipping_address.as_ref().map(|a| a.name.as_str()))
            .filter(|name| !name.is_empty())
            .unwrap_or("Guest")
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Distinct sizes across line items, `N/A` when none were chosen.
    pub fn sizes(&self) -> String {
        let mut sizes: Vec<&str> = Vec::new();
        for size in self.items.iter().filter_map(|item| item.size.as_deref()) {
            if !size.is_empty() && !sizes.contains(&size) {
                sizes.push(size);
            }
        }
        if sizes.is_empty() {
            "N/A".to_string()
        } else {
            sizes.join(", ")
        }
    }
}

/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, alias = "product", deserialize_with = "super::id::deserialize_opt_id")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Shipping address snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Internal note attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNote {
    pub note: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

// =============================================================================
// Workflow payloads
// =============================================================================

/// PUT /orders/{id}/status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// PUT /orders/{id}/cancel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub reason: String,
}

/// POST /orders/{id}/notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminNoteRequest {
    pub note: String,
}

/// PUT /orders/{id}/verify-payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub status: VerificationDecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_from_backend_shape() {
        let order: Order = serde_json::from_value(json!({
            "_id": "66aa01",
            "orderNumber": "ORD-1001",
            "status": "shipped",
            "paymentStatus": "paid",
            "items": [
                { "product": 12, "name": "Tee", "price": 450.0, "quantity": 2, "size": "M" },
                { "productId": "13", "name": "Cap", "price": 200.0, "size": "M" }
            ],
            "total": 1160.0,
            "shippingAddress": { "name": "Rahim", "phone": "017", "address": "Road 1", "city": "Dhaka" },
            "adminNotes": [{ "note": "called customer", "createdAt": "2024-03-02T10:00:00Z" }]
        }))
        .unwrap();

        assert_eq!(order.id, "66aa01");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.items[0].product_id.as_deref(), Some("12"));
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.sizes(), "M");
        assert_eq!(order.customer_label(), "Rahim");
        assert_eq!(order.admin_notes.len(), 1);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Order, _> =
            serde_json::from_value(json!({ "id": "1", "status": "lost" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_request_omits_empty_tracking() {
        let body = serde_json::to_value(StatusUpdateRequest {
            status: OrderStatus::Processing,
            tracking_number: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "processing" }));

        let body = serde_json::to_value(StatusUpdateRequest {
            status: OrderStatus::Shipped,
            tracking_number: Some("TRK-9".into()),
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "shipped", "trackingNumber": "TRK-9" }));
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("Delivered".parse::<OrderStatus>().unwrap(), OrderStatus::Delivered);
        assert_eq!(PaymentStatus::Refunded.to_string(), "refunded");
        let err = "lost".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown order status 'lost'");
    }
}

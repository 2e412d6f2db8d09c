use serde::{Deserialize, Serialize};

/// Order lifecycle states the backend understands.
///
/// Status travels as a plain string on the wire; this list drives the
/// status dropdowns and badge colors in the order views.
pub const ORDER_STATUSES: [&str; 5] = [
    "pending",
    "processing",
    "shipped",
    "delivered",
    "cancelled",
];

/// A customer order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique identifier for the order.
    pub id: i64,

    /// Human-facing order reference.
    pub order_number: String,

    /// The purchasing user.
    pub user_id: i64,

    /// Lifecycle state, one of [`ORDER_STATUSES`].
    pub status: String,

    /// Order total.
    pub total_amount: f64,

    /// Payment state, e.g. `paid` or `pending`.
    #[serde(default)]
    pub payment_status: String,

    /// Payment method label.
    #[serde(default)]
    pub payment_method: String,

    /// Carrier tracking number, once shipped.
    #[serde(default)]
    pub tracking_number: Option<String>,

    /// Free-form staff notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,

    /// Line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Shipping address; shape varies by backend version, kept opaque.
    #[serde(default)]
    pub shipping_address: Option<serde_json::Value>,
}

/// One line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique identifier for the line item.
    pub id: i64,
    /// The ordered product.
    pub product_id: i64,
    /// Product name captured at purchase time.
    pub product_name: String,
    /// Units ordered.
    pub quantity: i64,
    /// Unit price captured at purchase time.
    pub price: f64,
}

/// Body for `PUT /orders/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    /// The new lifecycle state.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_deserializes_with_items() {
        let json = r#"{
            "id": 11,
            "order_number": "SO-2024-0011",
            "user_id": 5,
            "status": "processing",
            "total_amount": 59.97,
            "payment_status": "paid",
            "payment_method": "card",
            "created_at": "2024-02-20T18:05:00",
            "items": [
                {"id": 1, "product_id": 3, "product_name": "Classic Tee", "quantity": 3, "price": 19.99}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_number, "SO-2024-0011");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.tracking_number, None);
        assert!(ORDER_STATUSES.contains(&order.status.as_str()));
    }

    #[test]
    fn status_update_serializes_to_expected_body() {
        let update = OrderStatusUpdate {
            status: "shipped".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"shipped"}"#
        );
    }
}

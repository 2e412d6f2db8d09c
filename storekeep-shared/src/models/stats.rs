use serde::{Deserialize, Serialize};

use super::Order;

/// Aggregates for the dashboard landing page, from `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    /// Number of products in the catalog.
    pub total_products: i64,
    /// Number of orders placed.
    pub total_orders: i64,
    /// Number of registered users.
    pub total_users: i64,
    /// Lifetime revenue.
    pub total_revenue: f64,
    /// Most recent orders for the activity table.
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_deserialize() {
        let json = r#"{
            "total_products": 42,
            "total_orders": 100,
            "total_users": 17,
            "total_revenue": 1234.56,
            "recent_orders": []
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_products, 42);
        assert!(stats.recent_orders.is_empty());
    }
}

//! Orders and shipment records.

use serde::{Deserialize, Serialize};

/// A customer order placed against this supplier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub order_number: String,
    /// Server-side status string: "pending", "dispatched", "delivered",
    /// "cancelled", "returned"
    pub status: String,
    pub customer_name: String,
    pub total: f64,
    #[serde(default)]
    pub placed_at: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub shipment_details: Option<ShipmentDetails>,
}

/// A single line item within an order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub variant: Option<String>,
}

/// Delivery address and courier assignment for an order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub recipient_name: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub courier: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub dispatched_at: Option<String>,
}

impl Order {
    /// Sum of line-item subtotals; the server's `total` may additionally
    /// include shipping, so this is display-only.
    pub fn items_subtotal(&self) -> f64 {
        self.order_items
            .iter()
            .map(|i| i.unit_price * i.quantity as f64)
            .sum()
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self.status.as_str(), "dispatched" | "delivered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        serde_json::from_str(
            r#"{
                "id": 42,
                "order_number": "ORD-2024-0042",
                "status": "pending",
                "customer_name": "Sara",
                "total": 2600.0,
                "order_items": [
                    {"product_id": 1, "name": "Mug", "quantity": 2, "unit_price": 550.0},
                    {"product_id": 2, "name": "Tray", "quantity": 1, "unit_price": 1200.0}
                ],
                "shipment_details": {
                    "recipient_name": "Sara",
                    "address": "House 12, Street 4",
                    "city": "Lahore"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn items_subtotal_sums_quantities() {
        assert_eq!(sample_order().items_subtotal(), 2300.0);
    }

    #[test]
    fn pending_order_is_not_dispatched() {
        let mut order = sample_order();
        assert!(!order.is_dispatched());
        order.status = "dispatched".to_string();
        assert!(order.is_dispatched());
    }
}

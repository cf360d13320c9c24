//! Supplier profile, dashboard stats and followers.

use serde::{Deserialize, Serialize};

/// Supplier (seller) account profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub id: u64,
    pub shop_name: String,
    pub owner_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

/// Aggregated dashboard figures for a supplier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_income: f64,
    pub pending_orders: u32,
    pub completed_orders: u32,
    pub total_products: u32,
    pub followers_count: u32,
    /// Outstanding platform debt; a positive balance can block API access
    #[serde(default)]
    pub outstanding_debt: f64,
}

/// Combined profile + stats payload fetched for the dashboard.
///
/// This is the unit that gets cached in session storage, so the two
/// sub-records are revalidated together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub profile: SupplierProfile,
    pub stats: DashboardStats,
}

/// A customer following the supplier's shop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub followed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_payload_deserializes_without_optional_fields() {
        let json = r#"{
            "profile": {
                "id": 7,
                "shop_name": "Khan Traders",
                "owner_name": "A. Khan",
                "email": "khan@example.com"
            },
            "stats": {
                "total_income": 500.0,
                "pending_orders": 2,
                "completed_orders": 14,
                "total_products": 31,
                "followers_count": 120
            }
        }"#;

        let payload: DashboardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.profile.shop_name, "Khan Traders");
        assert_eq!(payload.stats.total_income, 500.0);
        assert_eq!(payload.stats.outstanding_debt, 0.0);
        assert!(payload.profile.phone.is_none());
    }
}

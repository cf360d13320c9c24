//! Marketplace promotion campaigns.

use serde::{Deserialize, Serialize};

/// A platform-run promotion a supplier can join
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub discount_percent: u32,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    /// "upcoming", "live" or "ended"
    pub status: String,
    /// Whether this supplier has already enrolled
    #[serde(default)]
    pub joined: bool,
}

impl Promotion {
    /// Enrollment is only open before a promotion ends
    pub fn can_join(&self) -> bool {
        !self.joined && self.status != "ended"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(status: &str, joined: bool) -> Promotion {
        Promotion {
            id: 1,
            title: "Eid Sale".to_string(),
            description: String::new(),
            discount_percent: 20,
            starts_at: None,
            ends_at: None,
            status: status.to_string(),
            joined,
        }
    }

    #[test]
    fn join_rules() {
        assert!(promo("upcoming", false).can_join());
        assert!(promo("live", false).can_join());
        assert!(!promo("ended", false).can_join());
        assert!(!promo("live", true).can_join());
    }
}

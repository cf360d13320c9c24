//! Customer chat records.

use serde::{Deserialize, Serialize};

/// A conversation thread with one customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u64,
    pub customer_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A single message inside a conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    /// "supplier" or "customer"
    pub sender: String,
    pub body: String,
    #[serde(default)]
    pub sent_at: Option<String>,
}

impl ChatMessage {
    pub fn is_mine(&self) -> bool {
        self.sender == "supplier"
    }
}

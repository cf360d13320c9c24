//! API Record Types
//!
//! Declared shapes for everything the views consume. The backend owns the
//! authoritative state; these types only mirror the fields the portal reads
//! and writes.

pub mod chat;
pub mod order;
pub mod product;
pub mod promotion;
pub mod supplier;

pub use chat::{ChatMessage, Conversation};
pub use order::Order;
pub use product::{Product, ProductForm};
pub use promotion::Promotion;
pub use supplier::{DashboardPayload, Follower, SupplierProfile};

//! State Management
//!
//! Global reactive state, browser-storage session helpers and the
//! stale-while-revalidate cache used by the dashboard and followers pages.

pub mod cache;
pub mod global;
pub mod session;

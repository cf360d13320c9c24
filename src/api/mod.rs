//! HTTP Service Layer
//!
//! Thin typed wrappers over the marketplace REST API. Every function returns
//! `Result<T, ApiError>`; the shared client attaches the bearer token and
//! funnels 401/403 responses through the global logout path.

pub mod auth;
pub mod chat;
pub mod client;
pub mod push;
pub mod supplier;

pub use client::{get_api_base, set_api_base, ApiError};

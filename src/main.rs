//! Supplier Portal
//!
//! Seller-facing dashboard for the marketplace, built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with income/order stats and instant cached renders
//! - Product, order and promotion management
//! - Courier dispatch with client-side tracking-number validation
//! - Web push enrollment for order notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a thin CRUD client over the marketplace REST API; the
//! server owns all authoritative state.

use leptos::*;

mod api;
mod app;
mod components;
mod data;
mod format;
mod models;
mod pages;
mod state;
mod validation;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

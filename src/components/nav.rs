//! Navigation Component
//!
//! Header navigation bar with shop name, links and logout.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let shop_name = {
        let state = state.clone();
        move || {
            state
                .dashboard
                .get()
                .map(|d| d.profile.shop_name)
                .unwrap_or_else(|| "Supplier Portal".to_string())
        }
    };

    let state_for_logout = state.clone();
    let on_logout = move |_| {
        let state = state_for_logout.clone();
        spawn_local(async move {
            // Best-effort server teardown; local session is cleared either way
            if let Err(e) = api::auth::logout().await {
                web_sys::console::error_1(&format!("Logout request failed: {}", e).into());
            }
            state.logout();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and shop name
                    <A href="/dashboard" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏬"</span>
                        <span class="text-xl font-bold text-white">{shop_name}</span>
                    </A>

                    // Navigation links
                    {move || {
                        if state.is_authenticated() {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/dashboard" label="Dashboard" />
                                    <NavLink href="/products" label="Products" />
                                    <NavLink href="/orders" label="Orders" />
                                    <NavLink href="/promotions" label="Promotions" />
                                    <NavLink href="/followers" label="Followers" />
                                    <NavLink href="/account" label="Account" />
                                    <button
                                        on:click=on_logout.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/login" label="Login" />
                                    <NavLink href="/signup" label="Sign Up" />
                                </div>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

//! App Root Component
//!
//! Main application component with routing, auth gating and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{DebtOverlay, Nav, NoticeBanner, Toast};
use crate::pages::{
    Account, AddProduct, Dashboard, EditProduct, Followers, Legal, LegalPage, Login, Messages,
    OrderDetails, Orders, Products, PromotionDetails, Promotions, Signup, TrackOrder,
};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <NoticeBanner message="Courier rates were updated on September 1. Review your shipping settings." />

                    <Routes>
                        <Route path="/" view=HomeRedirect />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/dashboard" view=|| protected(Dashboard) />
                        <Route path="/followers" view=|| protected(Followers) />
                        <Route path="/products" view=|| protected(Products) />
                        <Route path="/products/add" view=|| protected(AddProduct) />
                        <Route path="/products/edit/:product_id" view=|| protected(EditProduct) />
                        <Route path="/orders" view=|| protected(Orders) />
                        <Route path="/orders/track/:order_id" view=|| protected(TrackOrder) />
                        <Route path="/orders/:order_id" view=|| protected(OrderDetails) />
                        <Route path="/promotions" view=|| protected(Promotions) />
                        <Route path="/promotions/:promotion_id" view=|| protected(PromotionDetails) />
                        <Route path="/messages" view=|| protected(Messages) />
                        <Route path="/account" view=|| protected(Account) />
                        <Route path="/privacy" view=|| view! { <Legal page=LegalPage::Privacy /> } />
                        <Route path="/terms" view=|| view! { <Legal page=LegalPage::Terms /> } />
                        // Unknown paths fall back to the login page
                        <Route path="/*any" view=|| view! { <Redirect path="/login" /> } />
                    </Routes>
                </main>

                // Footer with legal links
                <Footer />

                // Toast notifications
                <Toast />

                // Payment-required overlay
                <DebtOverlay />
            </div>
        </Router>
    }
}

/// Wrap a page so unauthenticated visitors are bounced to `/login`
fn protected<F, IV>(page: F) -> impl IntoView
where
    F: Fn() -> IV + 'static,
    IV: IntoView,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Show
            when=move || state.token.get().is_some()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {page()}
        </Show>
    }
}

/// `/` routes to the dashboard when logged in, otherwise to login
#[component]
fn HomeRedirect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.token.get().is_some() {
                view! { <Redirect path="/dashboard" /> }
            } else {
                view! { <Redirect path="/login" /> }
            }
        }}
    }
}

/// Footer component with legal links
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"© 2026 Supplier Portal"</span>
                <div class="flex items-center space-x-4">
                    <A href="/privacy" class="hover:text-white transition-colors">"Privacy"</A>
                    <A href="/terms" class="hover:text-white transition-colors">"Terms"</A>
                </div>
            </div>
        </footer>
    }
}

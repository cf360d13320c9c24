//! Dashboard Page
//!
//! Shop overview with income/order stats. Uses the session cache for an
//! instant render on repeat visits while the fresh payload loads behind it.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::{Loading, StatCard};
use crate::format;
use crate::models::{DashboardPayload, Order};
use crate::pages::orders::status_class;
use crate::state::cache;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let cache_key = cache::scoped_key("dashboard");

    // Instant render from the session cache when available
    let cached: Option<DashboardPayload> = cache::read(&cache_key);
    let had_cache = cached.is_some();
    if let Some(payload) = cached {
        state.dashboard.set(Some(payload));
    }

    let (loading, set_loading) = create_signal(!had_cache);
    let (error, set_error) = create_signal(None::<String>);

    // Revalidate against the server on every mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let cache_key = cache_key.clone();
        spawn_local(async move {
            let dashboard = state.dashboard;
            let debt_blocked = state.debt_blocked;
            cache::revalidate(
                &cache_key,
                api::supplier::fetch_dashboard,
                move |fresh| dashboard.set(Some(fresh)),
                move |err| match err {
                    ApiError::DebtBlocked => debt_blocked.set(true),
                    other => set_error.set(Some(other.to_string())),
                },
            )
            .await;
            set_loading.set(false);
        });
    });

    let state_for_view = state.clone();
    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your shop at a glance"</p>
                </div>

                {move || {
                    state_for_view.dashboard.get().and_then(|d| d.profile.rating).map(|rating| view! {
                        <div class="text-sm text-gray-400">
                            "⭐ " {format!("{:.1}", rating)} " shop rating"
                        </div>
                    })
                }}
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-6 text-center">
                            {msg}
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-8">
                            <StatGrid />
                            <RecentOrders />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Latest few orders, linked through to the order list
#[component]
fn RecentOrders() -> impl IntoView {
    let (recent, set_recent) = create_signal(Vec::<Order>::new());

    create_effect(move |_| {
        spawn_local(async move {
            match api::supplier::fetch_orders().await {
                Ok(mut list) => {
                    list.truncate(5);
                    set_recent.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Recent orders fetch failed: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <section>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold">"Recent Orders"</h2>
                <A href="/orders" class="text-primary-400 text-sm hover:underline">"View all"</A>
            </div>

            {move || {
                let list = recent.get();
                if list.is_empty() {
                    view! { <p class="text-gray-500 text-sm">"No orders yet."</p> }.into_view()
                } else {
                    view! {
                        <div class="space-y-2">
                            {list.into_iter().map(|order| {
                                let href = format!("/orders/{}", order.id);
                                view! {
                                    <A
                                        href=href
                                        class="flex items-center justify-between bg-gray-800 rounded-lg px-4 py-3
                                               border border-gray-700 hover:border-gray-600 transition-colors"
                                    >
                                        <div class="flex items-center space-x-3">
                                            <span class=format!(
                                                "{} text-xs px-2 py-0.5 rounded-full text-white capitalize",
                                                status_class(&order.status)
                                            )>
                                                {order.status.clone()}
                                            </span>
                                            <span class="font-medium">{order.order_number.clone()}</span>
                                        </div>
                                        <span class="text-sm">{format::pkr(order.total)}</span>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// Stat cards fed from the cached/fresh dashboard payload
#[component]
fn StatGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            match state.dashboard.get() {
                Some(payload) => {
                    let stats = payload.stats;
                    view! {
                        <div class="space-y-8">
                            <section>
                                <h2 class="text-lg font-semibold mb-4">"Earnings"</h2>
                                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                    <StatCard label="Total Income" value=format::pkr(stats.total_income) icon="💰" />
                                    <StatCard label="Pending Orders" value=stats.pending_orders.to_string() icon="📦" />
                                    <StatCard label="Completed Orders" value=stats.completed_orders.to_string() icon="✅" />
                                    <StatCard label="Followers" value=stats.followers_count.to_string() icon="👥" />
                                </div>
                            </section>

                            <section>
                                <h2 class="text-lg font-semibold mb-4">"Shop"</h2>
                                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                                    <StatCard label="Listed Products" value=stats.total_products.to_string() icon="🏷️" />
                                    <StatCard
                                        label="Outstanding Dues"
                                        value=format::pkr(stats.outstanding_debt)
                                        icon="⚠️"
                                    />
                                    <StatCard
                                        label="Member Since"
                                        value=payload.profile.joined_at
                                            .as_deref()
                                            .map(format::date)
                                            .unwrap_or_else(|| "—".to_string())
                                        icon="📅"
                                    />
                                </div>
                            </section>
                        </div>
                    }.into_view()
                }
                None => view! {
                    <p class="text-gray-400 text-center py-12">"No dashboard data yet."</p>
                }.into_view(),
            }
        }}
    }
}

//! Orders Page
//!
//! Order list with status chips and links to detail/dispatch views.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::format;
use crate::models::Order;
use crate::state::global::GlobalState;

/// Order list page
#[component]
pub fn Orders() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (orders, set_orders) = create_signal(Vec::<Order>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (filter, set_filter) = create_signal("all".to_string());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::supplier::fetch_orders().await {
                Ok(list) => set_orders.set(list),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let f = filter.get();
        orders
            .get()
            .into_iter()
            .filter(|o| f == "all" || o.status == f)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Orders"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} orders", orders.get().len())}
                    </p>
                </div>

                <select
                    on:change=move |ev| set_filter.set(event_target_value(&ev))
                    prop:value=move || filter.get()
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All"</option>
                    <option value="pending">"Pending"</option>
                    <option value="dispatched">"Dispatched"</option>
                    <option value="delivered">"Delivered"</option>
                    <option value="cancelled">"Cancelled"</option>
                    <option value="returned">"Returned"</option>
                </select>
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
                    let list = filtered();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-12">"No orders match this filter."</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-3">
                                {list.into_iter().map(|order| view! {
                                    <OrderRow order=order />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Status chip colours shared with the details page
pub fn status_class(status: &str) -> &'static str {
    match status {
        "pending" => "bg-yellow-600",
        "dispatched" => "bg-blue-600",
        "delivered" => "bg-green-600",
        "cancelled" => "bg-red-600",
        "returned" => "bg-orange-600",
        _ => "bg-gray-500",
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let detail_href = format!("/orders/{}", order.id);
    let track_href = format!("/orders/track/{}", order.id);
    let needs_dispatch = order.status == "pending";

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600
                    flex items-center justify-between transition-colors">
            <div class="flex items-center space-x-4">
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white capitalize", status_class(&order.status))>
                    {order.status.clone()}
                </span>
                <div>
                    <A href=detail_href class="font-medium hover:underline">
                        {order.order_number.clone()}
                    </A>
                    <div class="text-gray-500 text-sm">
                        {order.customer_name.clone()}
                        {order.placed_at.as_deref().map(|d| format!(" • {}", format::date(d))).unwrap_or_default()}
                    </div>
                </div>
            </div>

            <div class="flex items-center space-x-4">
                <span class="font-semibold">{format::pkr(order.total)}</span>
                {needs_dispatch.then(|| view! {
                    <A
                        href=track_href
                        class="px-3 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                    >
                        "Dispatch"
                    </A>
                })}
            </div>
        </div>
    }
}

//! Order Details Page

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::format;
use crate::models::Order;
use crate::pages::orders::status_class;
use crate::state::global::GlobalState;

/// Single order view with items and shipment details
#[component]
pub fn OrderDetails() -> impl IntoView {
    let params = use_params_map();
    let order_id = move || {
        params
            .with(|p| p.get("order_id").cloned())
            .and_then(|id| id.parse::<u64>().ok())
    };

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (order, set_order) = create_signal(None::<Order>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let Some(id) = order_id() else {
            set_error.set(Some("Invalid order id.".to_string()));
            set_loading.set(false);
            return;
        };
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::supplier::fetch_order(id).await {
                Ok(o) => set_order.set(Some(o)),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-6 text-center">
                            {msg}
                        </div>
                    }.into_view()
                } else if let Some(order) = order.get() {
                    view! { <OrderView order=order /> }.into_view()
                } else {
                    view! { <p class="text-gray-400 text-center py-12">"Order not found."</p> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn OrderView(order: Order) -> impl IntoView {
    let track_href = format!("/orders/track/{}", order.id);
    let needs_dispatch = order.status == "pending";
    let subtotal = order.items_subtotal();

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{order.order_number.clone()}</h1>
                    <p class="text-gray-400 mt-1">
                        {order.placed_at.as_deref().map(|d| format!("Placed {}", format::date_time(d))).unwrap_or_default()}
                    </p>
                </div>
                <span class=format!("{} text-sm px-3 py-1 rounded-full text-white capitalize", status_class(&order.status))>
                    {order.status.clone()}
                </span>
            </div>

            // Items
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Items"</h2>
                <div class="space-y-2">
                    {order.order_items.iter().map(|item| view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                            <div>
                                <span>{item.name.clone()}</span>
                                {item.variant.clone().map(|v| view! {
                                    <span class="text-gray-500 text-sm ml-2">{v}</span>
                                })}
                            </div>
                            <div class="text-sm text-gray-400">
                                {format!("{} × ", item.quantity)}
                                <span class="text-white">{format::pkr(item.unit_price)}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>

                <div class="flex items-center justify-between mt-4 pt-4 border-t border-gray-700">
                    <span class="text-gray-400">"Items subtotal"</span>
                    <span>{format::pkr(subtotal)}</span>
                </div>
                <div class="flex items-center justify-between mt-2 font-semibold">
                    <span>"Order total"</span>
                    <span>{format::pkr(order.total)}</span>
                </div>
            </section>

            // Shipment
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Shipment"</h2>
                    {needs_dispatch.then(|| view! {
                        <A
                            href=track_href.clone()
                            class="px-3 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm transition-colors"
                        >
                            "Dispatch Order"
                        </A>
                    })}
                </div>

                {match order.shipment_details.clone() {
                    Some(shipment) => view! {
                        <div class="space-y-2 text-sm">
                            <div class="flex justify-between">
                                <span class="text-gray-400">"Recipient"</span>
                                <span>{shipment.recipient_name}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-400">"Address"</span>
                                <span>{format!("{}, {}", shipment.address, shipment.city)}</span>
                            </div>
                            {shipment.phone.map(|phone| view! {
                                <div class="flex justify-between">
                                    <span class="text-gray-400">"Phone"</span>
                                    <span>{phone}</span>
                                </div>
                            })}
                            {shipment.courier.map(|courier| view! {
                                <div class="flex justify-between">
                                    <span class="text-gray-400">"Courier"</span>
                                    <span class="uppercase">{courier}</span>
                                </div>
                            })}
                            {shipment.tracking_number.map(|tracking| view! {
                                <div class="flex justify-between">
                                    <span class="text-gray-400">"Tracking #"</span>
                                    <span class="font-mono">{tracking}</span>
                                </div>
                            })}
                            {shipment.dispatched_at.as_deref().map(|d| {
                                let formatted = format::date_time(d);
                                view! {
                                    <div class="flex justify-between">
                                        <span class="text-gray-400">"Dispatched"</span>
                                        <span>{formatted}</span>
                                    </div>
                                }
                            })}
                        </div>
                    }.into_view(),
                    None => view! {
                        <p class="text-gray-400 text-sm">"No shipment details yet."</p>
                    }.into_view(),
                }}
            </section>
        </div>
    }
}

//! Dispatch / Tracking Page
//!
//! Courier selection and tracking-number entry for a pending order. The
//! tracking number is validated structurally as the supplier types, before
//! the dispatch request is sent.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::models::Order;
use crate::state::global::GlobalState;
use crate::validation::{self, validate_tracking};

/// Courier labels for the dropdown, keyed by courier code
fn courier_label(code: &str) -> &'static str {
    match code {
        "tcs" => "TCS",
        "leopards" => "Leopards Courier",
        "mnp" => "M&P",
        "trax" => "Trax",
        "postex" => "PostEx",
        "blueex" => "BlueEx",
        "rider" => "Rider",
        "dhl" => "DHL",
        _ => "Other",
    }
}

/// Dispatch form page
#[component]
pub fn TrackOrder() -> impl IntoView {
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

    let (courier, set_courier) = create_signal(String::new());
    let (tracking, set_tracking) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    // Live structural verdict shown under the input
    let verdict = create_memo(move |_| validate_tracking(&courier.get(), &tracking.get()));

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

    let navigate = use_navigate();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = verdict.get();
        if !current.is_valid {
            return;
        }
        let Some(id) = order_id() else {
            return;
        };

        set_submitting.set(true);

        let c = courier.get();
        let t = tracking.get();
        let state = state_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::supplier::dispatch_order(id, &c, &t).await {
                Ok(_) => {
                    state.show_success("Order dispatched");
                    navigate(&format!("/orders/{}", id), Default::default());
                }
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Dispatch Order"</h1>
                <p class="text-gray-400 mt-1">
                    {move || order.get().map(|o| o.order_number).unwrap_or_default()}
                </p>
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
                        <form on:submit=on_submit.clone() class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Courier"</label>
                                <select
                                    on:change=move |ev| set_courier.set(event_target_value(&ev))
                                    prop:value=move || courier.get()
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                >
                                    <option value="">"Select a courier"</option>
                                    {validation::known_couriers().into_iter().map(|code| view! {
                                        <option value=code>{courier_label(code)}</option>
                                    }).collect_view()}
                                    <option value="other">"Other"</option>
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Tracking Number"</label>
                                <input
                                    type="text"
                                    placeholder="As printed on the consignment slip"
                                    prop:value=move || tracking.get()
                                    on:input=move |ev| set_tracking.set(event_target_value(&ev))
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 font-mono
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />

                                // Inline structural feedback
                                {move || {
                                    let v = verdict.get();
                                    if v.is_valid && !tracking.get().is_empty() {
                                        view! {
                                            <p class="text-green-400 text-sm mt-1">"✓ Looks good"</p>
                                        }.into_view()
                                    } else if !v.message.is_empty() && !tracking.get().is_empty() {
                                        view! {
                                            <p class="text-red-400 text-sm mt-1">{v.message}</p>
                                        }.into_view()
                                    } else {
                                        view! {}.into_view()
                                    }
                                }}
                            </div>

                            <button
                                type="submit"
                                disabled=move || submitting.get() || !verdict.get().is_valid
                                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                            >
                                {move || if submitting.get() { "Dispatching..." } else { "Mark as Dispatched" }}
                            </button>
                        </form>
                    }.into_view()
                }
            }}
        </div>
    }
}

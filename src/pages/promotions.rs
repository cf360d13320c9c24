//! Promotions Pages
//!
//! Platform promotion list and detail view with join/leave actions.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::format;
use crate::models::Promotion;
use crate::state::global::GlobalState;

/// Promotion list page
#[component]
pub fn Promotions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (promotions, set_promotions) = create_signal(Vec::<Promotion>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::supplier::fetch_promotions().await {
                Ok(list) => set_promotions.set(list),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Promotions"</h1>
                <p class="text-gray-400 mt-1">"Join marketplace campaigns to boost visibility"</p>
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
                    let list = promotions.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-12">"No promotions running right now."</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-4">
                                {list.into_iter().map(|promo| view! {
                                    <PromotionCard promo=promo />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

fn promo_status_class(status: &str) -> &'static str {
    match status {
        "live" => "bg-green-600",
        "upcoming" => "bg-blue-600",
        "ended" => "bg-gray-500",
        _ => "bg-gray-500",
    }
}

#[component]
fn PromotionCard(promo: Promotion) -> impl IntoView {
    let detail_href = format!("/promotions/{}", promo.id);

    view! {
        <A
            href=detail_href
            class="block bg-gray-800 rounded-xl p-5 border border-gray-700 hover:border-gray-600 transition-colors"
        >
            <div class="flex items-start justify-between">
                <h3 class="font-semibold text-lg">{promo.title.clone()}</h3>
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white capitalize", promo_status_class(&promo.status))>
                    {promo.status.clone()}
                </span>
            </div>

            <p class="text-primary-400 font-bold text-2xl mt-2">
                {format!("{}% off", promo.discount_percent)}
            </p>

            <div class="text-gray-500 text-sm mt-3">
                {match (promo.starts_at.as_deref(), promo.ends_at.as_deref()) {
                    (Some(start), Some(end)) => {
                        format!("{} – {}", format::date(start), format::date(end))
                    }
                    _ => String::new(),
                }}
            </div>

            {promo.joined.then(|| view! {
                <div class="text-green-400 text-sm mt-2">"✓ You are enrolled"</div>
            })}
        </A>
    }
}

/// Promotion detail page with join/leave
#[component]
pub fn PromotionDetails() -> impl IntoView {
    let params = use_params_map();
    let promotion_id = move || {
        params
            .with(|p| p.get("promotion_id").cloned())
            .and_then(|id| id.parse::<u64>().ok())
    };

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (promo, set_promo) = create_signal(None::<Promotion>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let Some(id) = promotion_id() else {
            set_error.set(Some("Invalid promotion id.".to_string()));
            set_loading.set(false);
            return;
        };
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::supplier::fetch_promotion(id).await {
                Ok(p) => set_promo.set(Some(p)),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let state_for_toggle = state.clone();
    let on_toggle = move |_| {
        let Some(current) = promo.get() else {
            return;
        };
        set_busy.set(true);

        let state = state_for_toggle.clone();
        spawn_local(async move {
            let result = if current.joined {
                api::supplier::leave_promotion(current.id).await
            } else {
                api::supplier::join_promotion(current.id).await
            };
            match result {
                Ok(()) => {
                    state.show_success(if current.joined {
                        "Left the promotion"
                    } else {
                        "Joined the promotion"
                    });
                    set_promo.update(|p| {
                        if let Some(p) = p {
                            p.joined = !current.joined;
                        }
                    });
                }
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-6 text-center">
                            {msg}
                        </div>
                    }.into_view()
                } else if let Some(p) = promo.get() {
                    let on_toggle = on_toggle.clone();
                    let can_join = p.can_join();
                    let joined = p.joined;
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <div class="flex items-start justify-between">
                                <h1 class="text-3xl font-bold">{p.title.clone()}</h1>
                                <span class=format!("{} text-sm px-3 py-1 rounded-full text-white capitalize", promo_status_class(&p.status))>
                                    {p.status.clone()}
                                </span>
                            </div>

                            <p class="text-primary-400 font-bold text-3xl">
                                {format!("{}% off", p.discount_percent)}
                            </p>

                            <p class="text-gray-300">{p.description.clone()}</p>

                            <div class="text-gray-500 text-sm">
                                {match (p.starts_at.as_deref(), p.ends_at.as_deref()) {
                                    (Some(start), Some(end)) => {
                                        format!("Runs {} – {}", format::date(start), format::date(end))
                                    }
                                    _ => String::new(),
                                }}
                            </div>

                            {if can_join || joined {
                                view! {
                                    <button
                                        on:click=on_toggle
                                        disabled=move || busy.get()
                                        class=move || {
                                            if joined {
                                                "w-full px-4 py-3 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-600 \
                                                 rounded-lg font-semibold transition-colors"
                                            } else {
                                                "w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 \
                                                 rounded-lg font-semibold transition-colors"
                                            }
                                        }
                                    >
                                        {move || {
                                            if busy.get() {
                                                "Working..."
                                            } else if joined {
                                                "Leave Promotion"
                                            } else {
                                                "Join Promotion"
                                            }
                                        }}
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <p class="text-gray-500 text-sm">"This promotion has ended."</p>
                                }.into_view()
                            }}
                        </div>
                    }.into_view()
                } else {
                    view! { <p class="text-gray-400 text-center py-12">"Promotion not found."</p> }.into_view()
                }
            }}
        </div>
    }
}

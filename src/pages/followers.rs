//! Followers Page
//!
//! Customers following the shop. Same session-cache pattern as the
//! dashboard, keyed per data domain.

use leptos::*;

use crate::api::{self, ApiError};
use crate::components::Loading;
use crate::format;
use crate::models::Follower;
use crate::state::cache;
use crate::state::global::GlobalState;

/// Followers list page
#[component]
pub fn Followers() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let cache_key = cache::scoped_key("followers-list");

    let cached: Option<Vec<Follower>> = cache::read(&cache_key);
    let had_cache = cached.is_some();
    let (followers, set_followers) = create_signal(cached.unwrap_or_default());
    let (loading, set_loading) = create_signal(!had_cache);
    let (error, set_error) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let cache_key = cache_key.clone();
        spawn_local(async move {
            let debt_blocked = state.debt_blocked;
            cache::revalidate(
                &cache_key,
                api::supplier::fetch_followers,
                move |fresh| set_followers.set(fresh),
                move |err| match err {
                    ApiError::DebtBlocked => debt_blocked.set(true),
                    other => set_error.set(Some(other.to_string())),
                },
            )
            .await;
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Followers"</h1>
                <p class="text-gray-400 mt-1">
                    {move || format!("{} customers follow your shop", followers.get().len())}
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
                    let list = followers.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-12">
                                "Nobody follows your shop yet. Promotions help!"
                            </p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {list.into_iter().map(|follower| view! {
                                    <FollowerCard follower=follower />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn FollowerCard(follower: Follower) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 flex items-center space-x-4">
            <div class="w-10 h-10 rounded-full bg-gray-700 flex items-center justify-center text-lg">
                {follower.name.chars().next().unwrap_or('?').to_uppercase().to_string()}
            </div>
            <div>
                <div class="font-medium">{follower.name}</div>
                <div class="text-gray-500 text-sm">
                    {follower.followed_at
                        .as_deref()
                        .map(|d| format!("Following since {}", format::date(d)))
                        .unwrap_or_default()}
                </div>
            </div>
        </div>
    }
}

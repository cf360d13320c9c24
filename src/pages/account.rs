//! Account Page
//!
//! Profile editing, API connection settings and push-notification
//! enrollment.

use leptos::*;

use crate::api::{self, ApiError};
use crate::state::global::GlobalState;

/// Account settings page
#[component]
pub fn Account() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Account"</h1>
                <p class="text-gray-400 mt-1">"Your shop profile and preferences"</p>
            </div>

            <ProfileSection />
            <NotificationSection />
            <ApiSettings />
        </div>
    }
}

/// Profile edit form, prefilled from the cached dashboard payload when
/// available
#[component]
fn ProfileSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let profile = state.dashboard.get_untracked().map(|d| d.profile);
    let (shop_name, set_shop_name) =
        create_signal(profile.as_ref().map(|p| p.shop_name.clone()).unwrap_or_default());
    let (owner_name, set_owner_name) =
        create_signal(profile.as_ref().map(|p| p.owner_name.clone()).unwrap_or_default());
    let (phone, set_phone) = create_signal(
        profile
            .as_ref()
            .and_then(|p| p.phone.clone())
            .unwrap_or_default(),
    );
    let (city, set_city) = create_signal(
        profile
            .as_ref()
            .and_then(|p| p.city.clone())
            .unwrap_or_default(),
    );
    let (address, set_address) = create_signal(
        profile
            .as_ref()
            .and_then(|p| p.address.clone())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);

    let state_for_save = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if shop_name.get().trim().is_empty() || owner_name.get().trim().is_empty() {
            state_for_save.show_error("Shop name and owner name are required.");
            return;
        }

        set_saving.set(true);

        let update = api::auth::ProfileUpdate {
            shop_name: shop_name.get(),
            owner_name: owner_name.get(),
            phone: phone.get(),
            city: city.get(),
            address: address.get(),
        };

        let state = state_for_save.clone();
        spawn_local(async move {
            match api::auth::update_profile(&update).await {
                Ok(updated) => {
                    // Keep the dashboard payload in sync for the nav header
                    state.dashboard.update(|d| {
                        if let Some(d) = d {
                            d.profile = updated;
                        }
                    });
                    state.show_success("Profile saved");
                }
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Shop Profile"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Shop Name"</label>
                        <input
                            type="text"
                            prop:value=move || shop_name.get()
                            on:input=move |ev| set_shop_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Owner Name"</label>
                        <input
                            type="text"
                            prop:value=move || owner_name.get()
                            on:input=move |ev| set_owner_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"City"</label>
                        <input
                            type="text"
                            prop:value=move || city.get()
                            on:input=move |ev| set_city.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Pickup Address"</label>
                    <textarea
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                        rows=2
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </section>
    }
}

/// Web push enrollment
#[component]
fn NotificationSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (enrolling, set_enrolling) = create_signal(false);
    let (enrolled, set_enrolled) = create_signal(false);

    let state_for_enroll = state.clone();
    let on_enroll = move |_| {
        set_enrolling.set(true);

        let state = state_for_enroll.clone();
        spawn_local(async move {
            match api::push::enroll().await {
                Ok(()) => {
                    set_enrolled.set(true);
                    state.show_success("Order notifications enabled");
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_enrolling.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Notifications"</h2>

            <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                <div>
                    <h3 class="font-medium">"Order Alerts"</h3>
                    <p class="text-sm text-gray-400">"Get a browser notification when a new order arrives"</p>
                </div>
                {move || {
                    if enrolled.get() {
                        view! {
                            <span class="text-green-400 text-sm">"✓ Enabled"</span>
                        }.into_view()
                    } else {
                        let on_enroll = on_enroll.clone();
                        view! {
                            <button
                                on:click=on_enroll
                                disabled=move || enrolling.get()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if enrolling.get() { "Enabling..." } else { "Enable" }}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Portal API URL"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </section>
    }
}

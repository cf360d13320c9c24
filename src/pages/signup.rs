//! Signup Page
//!
//! Two-step seller registration. Step one creates the account and stores the
//! partial-auth token; step two completes the shop profile under that token
//! and upgrades it to a full session.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::session;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Credentials,
    ShopProfile,
}

/// Seller signup page
#[component]
pub fn Signup() -> impl IntoView {
    // Resume step two if a partial signup was interrupted in this browser
    let initial_step = if session::temp_token().is_some() {
        Step::ShopProfile
    } else {
        Step::Credentials
    };
    let (step, set_step) = create_signal(initial_step);

    view! {
        <div class="max-w-md mx-auto mt-16">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-1">"Become a Seller"</h1>
                <p class="text-gray-400 text-sm mb-6">
                    {move || match step.get() {
                        Step::Credentials => "Step 1 of 2: account details",
                        Step::ShopProfile => "Step 2 of 2: your shop",
                    }}
                </p>

                {move || match step.get() {
                    Step::Credentials => view! {
                        <CredentialsStep on_done=move || set_step.set(Step::ShopProfile) />
                    }.into_view(),
                    Step::ShopProfile => view! { <ShopProfileStep /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn CredentialsStep(on_done: impl Fn() + Clone + 'static) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let e = email.get();
        let p = password.get();
        let ph = phone.get();

        if e.trim().is_empty() || p.len() < 8 || ph.trim().is_empty() {
            set_error.set(Some(
                "All fields are required; password must be at least 8 characters.".to_string(),
            ));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let on_done = on_done.clone();
        spawn_local(async move {
            match api::auth::signup_start(&e, &p, &ph).await {
                Ok(response) => {
                    session::set_temp_token(&response.temp_token);
                    on_done();
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            {move || error.get().map(|msg| view! {
                <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                    {msg}
                </div>
            })}

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                <input
                    type="password"
                    placeholder="At least 8 characters"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Phone"</label>
                <input
                    type="tel"
                    placeholder="03xx-xxxxxxx"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Creating account..." } else { "Continue" }}
            </button>
        </form>
    }
}

#[component]
fn ShopProfileStep() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (shop_name, set_shop_name) = create_signal(String::new());
    let (owner_name, set_owner_name) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let shop = shop_name.get();
        let owner = owner_name.get();
        let c = city.get();

        if shop.trim().is_empty() || owner.trim().is_empty() || c.trim().is_empty() {
            set_error.set(Some("All fields are required.".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::auth::signup_complete(&shop, &owner, &c).await {
                Ok(response) => {
                    session::clear_temp_token();
                    state.login(&response.token, response.supplier_id);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            {move || error.get().map(|msg| view! {
                <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                    {msg}
                </div>
            })}

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

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Finishing up..." } else { "Open My Shop" }}
            </button>
        </form>
    }
}

//! Login Page

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::global::GlobalState;

/// Login form page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let e = email.get();
        let p = password.get();

        if e.trim().is_empty() || p.is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::auth::login(&e, &p).await {
                Ok(response) => {
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
        <div class="max-w-md mx-auto mt-16">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-1">"Seller Login"</h1>
                <p class="text-gray-400 text-sm mb-6">"Manage your shop, orders and promotions"</p>

                {move || error.get().map(|msg| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3 mb-4">
                        {msg}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@shop.pk"
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
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
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
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6 text-center">
                    "New to the marketplace? "
                    <a href="/signup" class="text-primary-400 hover:underline">"Create a seller account"</a>
                </p>
            </div>
        </div>
    }
}

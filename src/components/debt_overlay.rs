//! Payment-Required Overlay
//!
//! Raised when the API rejects a request with the debt-blocked discriminator
//! instead of a plain 403. The supplier stays logged in; the overlay sends
//! them to the hosted payment page.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Full-screen payment-required overlay
#[component]
pub fn DebtOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (redirecting, set_redirecting) = create_signal(false);

    let state_for_pay = state.clone();
    let on_pay = move |_| {
        set_redirecting.set(true);

        let state = state_for_pay.clone();
        spawn_local(async move {
            match api::supplier::initiate_debt_payment().await {
                Ok(intent) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&intent.payment_url);
                    }
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_redirecting.set(false);
        });
    };

    view! {
        {move || {
            if state.debt_blocked.get() {
                view! {
                    <div class="fixed inset-0 bg-black/70 flex items-center justify-center z-50">
                        <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md mx-4 text-center">
                            <div class="text-5xl mb-4">"⚠️"</div>
                            <h2 class="text-2xl font-bold mb-2">"Payment Required"</h2>
                            <p class="text-gray-400 mb-6">
                                "Your account is blocked because of outstanding platform dues. "
                                "Clear the balance to regain access to your shop."
                            </p>
                            <button
                                on:click=on_pay.clone()
                                disabled=move || redirecting.get()
                                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors"
                            >
                                {move || if redirecting.get() { "Redirecting..." } else { "Pay Now" }}
                            </button>
                        </div>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

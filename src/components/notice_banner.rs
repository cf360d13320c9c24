//! Notice Banner Component
//!
//! One-shot announcement banner. Dismissal is remembered for the rest of the
//! tab session via sessionStorage, not across browser restarts.

use leptos::*;

use crate::state::session;

/// Dismissible announcement banner shown above the page content
#[component]
pub fn NoticeBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(!session::notice_dismissed());

    let dismiss = move |_| {
        session::dismiss_notice();
        set_visible.set(false);
    };

    view! {
        {move || {
            if visible.get() {
                let message = message.clone();
                view! {
                    <div class="bg-primary-900/60 border border-primary-700 rounded-lg px-4 py-3
                                flex items-center justify-between mb-6">
                        <div class="flex items-center space-x-3">
                            <span class="text-lg">"📣"</span>
                            <span class="text-sm">{message}</span>
                        </div>
                        <button
                            on:click=dismiss
                            class="text-gray-400 hover:text-white ml-4"
                        >
                            "✕"
                        </button>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

//! Toast Notification Component
//!
//! Renders the global success/error signals as stacked toasts. The signals
//! auto-clear on a timer (see `GlobalState::show_success`/`show_error`), so
//! this component only reads.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast stack fed from the global success and error signals
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let entries = move || {
        let mut list = Vec::new();
        if let Some(msg) = state.success.get() {
            list.push((msg, "✓", "bg-green-600"));
        }
        if let Some(msg) = state.error.get() {
            list.push((msg, "✕", "bg-red-600"));
        }
        list
    };

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || entries().into_iter().map(|(msg, icon, bg)| view! {
                <div class=format!(
                    "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                     animate-slide-in",
                    bg
                )>
                    <span class="text-lg">{icon}</span>
                    <span class="text-sm font-medium">{msg}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::models::DashboardPayload;
use crate::state::session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Bearer token, mirrored from localStorage so the router can react to
    /// login/logout without a reload
    pub token: RwSignal<Option<String>>,
    /// Dashboard profile + stats; the nav reads the shop name from here
    pub dashboard: RwSignal<Option<DashboardPayload>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Payment-required overlay, raised by the debt-blocked API error
    pub debt_blocked: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        token: create_rw_signal(session::token()),
        dashboard: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        debt_blocked: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Record a fresh login in both storage and reactive state
    pub fn login(&self, token: &str, supplier_id: u64) {
        session::set_token(token);
        session::set_supplier_id(supplier_id);
        self.token.set(Some(token.to_string()));
    }

    pub fn logout(&self) {
        session::clear_session();
        self.token.set(None);
        self.dashboard.set(None);
        self.debt_blocked.set(false);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

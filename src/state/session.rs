//! Browser Storage Session Helpers
//!
//! Thin wrappers over `localStorage` (auth tokens, survive the tab) and
//! `sessionStorage` (per-tab flags and caches).

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "supplierToken";
/// localStorage key for the partial-signup token
pub const TEMP_TOKEN_KEY: &str = "tempAuthToken";
/// localStorage key for the logged-in supplier id (scopes cache keys)
pub const SUPPLIER_ID_KEY: &str = "supplierId";
/// sessionStorage one-shot flag for the dismissible notice banner
pub const NOTICE_DISMISSED_KEY: &str = "notice-banner-dismissed";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn temp_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TEMP_TOKEN_KEY).ok().flatten())
}

pub fn set_temp_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TEMP_TOKEN_KEY, token);
    }
}

pub fn clear_temp_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TEMP_TOKEN_KEY);
    }
}

pub fn supplier_id() -> Option<u64> {
    local_storage()
        .and_then(|s| s.get_item(SUPPLIER_ID_KEY).ok().flatten())
        .and_then(|v| v.parse().ok())
}

pub fn set_supplier_id(id: u64) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SUPPLIER_ID_KEY, &id.to_string());
    }
}

/// Drop all auth state. Cached page payloads stay behind in sessionStorage;
/// cache keys are scoped by supplier id so the next account cannot see them.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(TEMP_TOKEN_KEY);
        let _ = storage.remove_item(SUPPLIER_ID_KEY);
    }
}

/// Clear auth state and hard-redirect to the login page. Used by the global
/// 401/403 handler.
pub fn force_logout() {
    clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

pub fn notice_dismissed() -> bool {
    session_storage()
        .and_then(|s| s.get_item(NOTICE_DISMISSED_KEY).ok().flatten())
        .is_some()
}

pub fn dismiss_notice() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(NOTICE_DISMISSED_KEY, "1");
    }
}

/// Raw sessionStorage read, used by the cache module
pub fn session_get(key: &str) -> Option<String> {
    session_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Raw sessionStorage write, used by the cache module
pub fn session_set(key: &str, value: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Raw sessionStorage delete, used by the cache module
pub fn session_remove(key: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(key);
    }
}

//! Stale-While-Revalidate Session Cache
//!
//! Gives list/dashboard pages an instant render on repeat visits within the
//! same tab session while the authoritative fetch runs in the background.
//!
//! Contract:
//! 1. On mount the page reads its key synchronously via [`read`]; a hit is
//!    rendered immediately with the loading flag off. An entry that no
//!    longer deserializes is deleted on read.
//! 2. The network fetch always runs ([`revalidate`]).
//! 3. The fresh value is serialized and compared by string equality against
//!    the cached serialized form. Equal: the view state is left untouched.
//!    Different (or no prior cache): the cache entry is overwritten and the
//!    page's apply callback runs.
//! 4. A fetch failure is suppressed when cached content is already showing
//!    (console log only); with no cache it is passed to the error callback.
//!
//! The string-equality comparison is deliberately not a deep diff: key
//! reordering or float formatting changes in the server response count as a
//! change. Entries have no TTL; they live until a differing fetch overwrites
//! them. Cache keys are scoped by supplier id and a per-key in-flight guard
//! drops overlapping revalidations (WASM is single-event-loop, so a
//! thread-local set suffices).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashSet;
use std::future::Future;

use crate::api::client::ApiError;
use crate::state::session;

/// Outcome of comparing a fresh payload against the cached serialized form
#[derive(Clone, Debug, PartialEq)]
pub enum Revalidation {
    /// Fresh payload differs (or nothing was cached); carries the new
    /// serialized form to store
    Updated(String),
    /// Byte-identical serialization; leave view state and cache alone
    Unchanged,
}

/// Pure comparison step of the revalidate flow
pub fn reconcile(cached: Option<&str>, fresh_serialized: &str) -> Revalidation {
    match cached {
        Some(prev) if prev == fresh_serialized => Revalidation::Unchanged,
        _ => Revalidation::Updated(fresh_serialized.to_string()),
    }
}

/// Cache key for a data domain, scoped by the logged-in supplier so a second
/// account in the same tab session cannot see the first account's payloads.
pub fn scoped_key(domain: &str) -> String {
    match session::supplier_id() {
        Some(id) => format!("{}:{}", domain, id),
        None => format!("{}:anon", domain),
    }
}

/// Outcome of decoding a stored cache entry
#[derive(Debug)]
enum Lookup<T> {
    Hit(T),
    Miss,
    /// Stored string no longer deserializes; carries the decode error
    Corrupt(String),
}

fn classify<T: DeserializeOwned>(raw: Option<String>) -> Lookup<T> {
    match raw {
        None => Lookup::Miss,
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Lookup::Hit(value),
            Err(e) => Lookup::Corrupt(e.to_string()),
        },
    }
}

/// Synchronous cache read for the instant first render. A corrupt entry is
/// deleted, not just skipped, so [`revalidate`] sees a true miss and a
/// failing fetch still reaches the page's error callback.
pub fn read<T: DeserializeOwned>(key: &str) -> Option<T> {
    match classify(session::session_get(key)) {
        Lookup::Hit(value) => Some(value),
        Lookup::Miss => None,
        Lookup::Corrupt(e) => {
            web_sys::console::error_1(
                &format!("Discarding corrupt cache entry {}: {}", key, e).into(),
            );
            session::session_remove(key);
            None
        }
    }
}

thread_local! {
    static IN_FLIGHT: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

fn begin(key: &str) -> bool {
    IN_FLIGHT.with(|set| set.borrow_mut().insert(key.to_string()))
}

fn end(key: &str) {
    IN_FLIGHT.with(|set| {
        set.borrow_mut().remove(key);
    });
}

/// Fetch the authoritative value, reconcile it against the cache and apply
/// it to view state when it changed.
///
/// `apply` runs only for a changed payload. `on_error` runs when the fetch
/// fails and no cached content is showing, and always for
/// [`ApiError::DebtBlocked`] (the payment overlay must appear even over
/// stale data).
pub async fn revalidate<T, Fut>(
    key: &str,
    fetch: impl FnOnce() -> Fut,
    apply: impl FnOnce(T),
    on_error: impl FnOnce(ApiError),
) where
    T: Serialize + DeserializeOwned,
    Fut: Future<Output = Result<T, ApiError>>,
{
    // Overlapping revalidation for the same key: drop this one.
    if !begin(key) {
        return;
    }

    let previous = session::session_get(key);

    match fetch().await {
        Ok(fresh) => match serde_json::to_string(&fresh) {
            Ok(serialized) => {
                if let Revalidation::Updated(payload) = reconcile(previous.as_deref(), &serialized)
                {
                    session::session_set(key, &payload);
                    apply(fresh);
                }
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to serialize cache entry {}: {}", key, e).into(),
                );
            }
        },
        Err(err) => {
            if matches!(err, ApiError::DebtBlocked) || previous.is_none() {
                on_error(err);
            } else {
                // Stale content is already on screen; fail silently.
                web_sys::console::error_1(
                    &format!("Background refresh failed for {}: {}", key, err).into(),
                );
            }
        }
    }

    end(key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_updates_when_no_prior_cache() {
        let verdict = reconcile(None, r#"{"totalIncome":500}"#);
        assert_eq!(
            verdict,
            Revalidation::Updated(r#"{"totalIncome":500}"#.to_string())
        );
    }

    #[test]
    fn reconcile_leaves_identical_payload_alone() {
        let cached = r#"{"totalIncome":500}"#;
        assert_eq!(reconcile(Some(cached), cached), Revalidation::Unchanged);
    }

    #[test]
    fn reconcile_replaces_on_any_difference() {
        let cached = r#"{"totalIncome":500}"#;
        let fresh = r#"{"totalIncome":501}"#;
        assert_eq!(
            reconcile(Some(cached), fresh),
            Revalidation::Updated(fresh.to_string())
        );
    }

    #[test]
    fn reconcile_is_textual_not_semantic() {
        // Same value, different key order: string comparison reports a change.
        let cached = r#"{"a":1,"b":2}"#;
        let fresh = r#"{"b":2,"a":1}"#;
        assert!(matches!(
            reconcile(Some(cached), fresh),
            Revalidation::Updated(_)
        ));
    }

    #[test]
    fn classify_decodes_stored_entries() {
        assert!(matches!(
            classify::<u64>(Some("500".to_string())),
            Lookup::Hit(500)
        ));
        assert!(matches!(classify::<u64>(None), Lookup::Miss));
    }

    #[test]
    fn classify_flags_undecodable_entries_as_corrupt() {
        // A corrupt entry must not read as a hit: `read` deletes it, so a
        // later failed refresh surfaces instead of being silently dropped.
        assert!(matches!(
            classify::<u64>(Some("{not json".to_string())),
            Lookup::Corrupt(_)
        ));
    }

    #[test]
    fn in_flight_guard_blocks_second_entry() {
        assert!(begin("followers:1"));
        assert!(!begin("followers:1"));
        // A different key is unaffected
        assert!(begin("dashboard:1"));
        end("followers:1");
        assert!(begin("followers:1"));
        end("followers:1");
        end("dashboard:1");
    }
}

//! Web Push Enrollment
//!
//! Permission request, VAPID key fetch, PushManager subscription and
//! registration of the subscription with the server.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::client::{self, ApiError};

#[derive(Debug, Deserialize)]
struct VapidKeyResponse {
    public_key: String,
}

fn js_err(context: &str, err: JsValue) -> ApiError {
    ApiError::Api(format!("{}: {:?}", context, err))
}

/// Run the full enrollment flow:
/// permission prompt -> VAPID key -> subscribe -> POST subscription.
pub async fn enroll() -> Result<(), ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Api("No window available".to_string()))?;

    // 1. Notification permission
    let permission_promise = web_sys::Notification::request_permission()
        .map_err(|e| js_err("Notification permission request failed", e))?;
    let permission = JsFuture::from(permission_promise)
        .await
        .map_err(|e| js_err("Notification permission request failed", e))?;
    if permission.as_string().as_deref() != Some("granted") {
        return Err(ApiError::Api(
            "Notifications are blocked for this site.".to_string(),
        ));
    }

    // 2. Server's VAPID public key
    let vapid: VapidKeyResponse = client::get_json("/push/vapid-key").await?;
    let server_key = base64url_decode(&vapid.public_key)
        .ok_or_else(|| ApiError::Parse("Invalid VAPID key from server".to_string()))?;

    // 3. Subscribe through the service worker registration
    let registration_promise = window
        .navigator()
        .service_worker()
        .ready()
        .map_err(|e| js_err("Service worker not available", e))?;
    let registration: web_sys::ServiceWorkerRegistration = JsFuture::from(registration_promise)
        .await
        .map_err(|e| js_err("Service worker not ready", e))?
        .dyn_into()
        .map_err(|e| js_err("Unexpected service worker registration", e))?;

    let push_manager = registration
        .push_manager()
        .map_err(|e| js_err("Push manager not available", e))?;

    let key_array = js_sys::Uint8Array::from(server_key.as_slice());
    let options = web_sys::PushSubscriptionOptionsInit::new();
    options.set_user_visible_only(true);
    options.set_application_server_key(&key_array);

    let subscription: web_sys::PushSubscription =
        JsFuture::from(push_manager.subscribe_with_options(&options).map_err(|e| {
            js_err("Push subscription failed", e)
        })?)
        .await
        .map_err(|e| js_err("Push subscription failed", e))?
        .dyn_into()
        .map_err(|e| js_err("Unexpected push subscription", e))?;

    // 4. Register the subscription with the server
    let serialized = js_sys::JSON::stringify(&subscription)
        .map_err(|e| js_err("Subscription serialization failed", e))?;
    let subscription_json: serde_json::Value =
        serde_json::from_str(&String::from(serialized))
            .map_err(|e| ApiError::Parse(e.to_string()))?;

    let _: serde_json::Value = client::post_json("/push/subscriptions", &subscription_json).await?;
    Ok(())
}

/// Decode a base64url string (VAPID keys are sent unpadded)
fn base64url_decode(input: &str) -> Option<Vec<u8>> {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let mut output = Vec::with_capacity(input.len() * 3 / 4);
    let mut buffer: u32 = 0;
    let mut bits = 0;

    for ch in input.bytes() {
        if ch == b'=' {
            break;
        }
        let value = ALPHABET.iter().position(|&a| a == ch)? as u32;
        buffer = (buffer << 6) | value;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
        }
    }

    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64url() {
        assert_eq!(base64url_decode("aGVsbG8").unwrap(), b"hello");
        // URL-safe alphabet characters
        assert_eq!(base64url_decode("_-8").unwrap(), vec![0xff, 0xef]);
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(base64url_decode("a+b/").is_none());
    }
}

//! Shared HTTP Client
//!
//! Base URL handling, bearer-token attachment and the global response check
//! every service module goes through.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("portal_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("portal_api_url", url);
        }
    }
}

/// Errors surfaced by the service layer
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Response body could not be decoded
    Parse(String),
    /// Server rejected the request; carries the server's `message`
    Api(String),
    /// 401/403 without a debt discriminator; the client has already forced
    /// a logout redirect by the time this is returned
    Unauthorized,
    /// Access denied due to outstanding platform debt; handled in-page with
    /// the payment-required overlay instead of a logout
    DebtBlocked,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Parse(e) => write!(f, "Parse error: {}", e),
            ApiError::Api(msg) => write!(f, "{}", msg),
            ApiError::Unauthorized => write!(f, "Session expired. Please log in again."),
            ApiError::DebtBlocked => {
                write!(f, "Account access is blocked until outstanding dues are cleared.")
            }
        }
    }
}

/// Error body shape the backend uses
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    /// Discriminator for special-cased failures, e.g. `debt_blocked`
    #[serde(default)]
    code: Option<String>,
}

const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Attach the bearer token, preferring the full session token over the
/// partial-signup token.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    let token = session::token().or_else(session::temp_token);
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Global response check: 401/403 forces logout unless the server signals
/// the debt condition; other failures surface the server's `message`.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap_or_default();

    if status == 401 || status == 403 {
        if body.code.as_deref() == Some("debt_blocked") {
            return Err(ApiError::DebtBlocked);
        }
        session::force_logout();
        return Err(ApiError::Unauthorized);
    }

    Err(ApiError::Api(
        body.message.unwrap_or_else(|| GENERIC_ERROR.to_string()),
    ))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(&format!("{}{}", get_api_base(), path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(check(response).await?).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorize(Request::post(&format!("{}{}", get_api_base(), path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(check(response).await?).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorize(Request::put(&format!("{}{}", get_api_base(), path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(check(response).await?).await
}

/// POST without a request body, discarding the response body
pub(crate) async fn post_empty(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::post(&format!("{}{}", get_api_base(), path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response).await.map(|_| ())
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&format!("{}{}", get_api_base(), path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response).await.map(|_| ())
}

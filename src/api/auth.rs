//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::client::{self, ApiError};
use crate::models::SupplierProfile;

#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub supplier_id: u64,
}

/// Exchange credentials for a bearer token
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    client::post_json(
        "/auth/login",
        &LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        },
    )
    .await
}

#[derive(Serialize)]
struct SignupStartRequest {
    email: String,
    password: String,
    phone: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupStartResponse {
    /// Short-lived token for completing the shop profile step
    pub temp_token: String,
}

/// Step one of signup: create the account, returning a partial-auth token
pub async fn signup_start(
    email: &str,
    password: &str,
    phone: &str,
) -> Result<SignupStartResponse, ApiError> {
    client::post_json(
        "/auth/signup",
        &SignupStartRequest {
            email: email.to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
        },
    )
    .await
}

#[derive(Serialize)]
struct SignupCompleteRequest {
    shop_name: String,
    owner_name: String,
    city: String,
}

/// Step two of signup: finish the shop profile under the temp token and
/// receive a full session
pub async fn signup_complete(
    shop_name: &str,
    owner_name: &str,
    city: &str,
) -> Result<LoginResponse, ApiError> {
    client::post_json(
        "/auth/signup/complete",
        &SignupCompleteRequest {
            shop_name: shop_name.to_string(),
            owner_name: owner_name.to_string(),
            city: city.to_string(),
        },
    )
    .await
}

#[derive(Serialize)]
pub struct ProfileUpdate {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
}

/// Update the account profile
pub async fn update_profile(update: &ProfileUpdate) -> Result<SupplierProfile, ApiError> {
    client::put_json("/account/profile", update).await
}

/// Server-side session teardown; local storage is cleared regardless of the
/// outcome
pub async fn logout() -> Result<(), ApiError> {
    client::post_empty("/auth/logout").await
}

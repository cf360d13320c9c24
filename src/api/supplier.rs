//! Supplier endpoints: dashboard, followers, products, orders, promotions.

use serde::{Deserialize, Serialize};

use super::client::{self, ApiError};
use crate::models::{DashboardPayload, Follower, Order, Product, ProductForm, Promotion};

/// Fetch the combined profile + stats payload for the dashboard
pub async fn fetch_dashboard() -> Result<DashboardPayload, ApiError> {
    client::get_json("/supplier/dashboard").await
}

#[derive(Debug, Deserialize)]
struct FollowerListResponse {
    followers: Vec<Follower>,
}

/// Fetch the shop's follower list
pub async fn fetch_followers() -> Result<Vec<Follower>, ApiError> {
    let response: FollowerListResponse = client::get_json("/supplier/followers").await?;
    Ok(response.followers)
}

// ============ Products ============

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    products: Vec<Product>,
}

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let response: ProductListResponse = client::get_json("/supplier/products").await?;
    Ok(response.products)
}

pub async fn fetch_product(product_id: u64) -> Result<Product, ApiError> {
    client::get_json(&format!("/supplier/products/{}", product_id)).await
}

pub async fn create_product(form: &ProductForm) -> Result<Product, ApiError> {
    client::post_json("/supplier/products", form).await
}

pub async fn update_product(product_id: u64, form: &ProductForm) -> Result<Product, ApiError> {
    client::put_json(&format!("/supplier/products/{}", product_id), form).await
}

pub async fn delete_product(product_id: u64) -> Result<(), ApiError> {
    client::delete(&format!("/supplier/products/{}", product_id)).await
}

// ============ Orders ============

#[derive(Debug, Deserialize)]
struct OrderListResponse {
    orders: Vec<Order>,
}

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    let response: OrderListResponse = client::get_json("/supplier/orders").await?;
    Ok(response.orders)
}

pub async fn fetch_order(order_id: u64) -> Result<Order, ApiError> {
    client::get_json(&format!("/supplier/orders/{}", order_id)).await
}

#[derive(Serialize)]
struct DispatchRequest {
    courier: String,
    tracking_number: String,
}

/// Mark an order dispatched with its courier assignment. The tracking number
/// is validated client-side first, but the server re-checks it.
pub async fn dispatch_order(
    order_id: u64,
    courier: &str,
    tracking_number: &str,
) -> Result<Order, ApiError> {
    client::post_json(
        &format!("/supplier/orders/{}/dispatch", order_id),
        &DispatchRequest {
            courier: courier.to_string(),
            tracking_number: tracking_number.to_string(),
        },
    )
    .await
}

// ============ Promotions ============

#[derive(Debug, Deserialize)]
struct PromotionListResponse {
    promotions: Vec<Promotion>,
}

pub async fn fetch_promotions() -> Result<Vec<Promotion>, ApiError> {
    let response: PromotionListResponse = client::get_json("/supplier/promotions").await?;
    Ok(response.promotions)
}

pub async fn fetch_promotion(promotion_id: u64) -> Result<Promotion, ApiError> {
    client::get_json(&format!("/supplier/promotions/{}", promotion_id)).await
}

pub async fn join_promotion(promotion_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/supplier/promotions/{}/join", promotion_id)).await
}

pub async fn leave_promotion(promotion_id: u64) -> Result<(), ApiError> {
    client::post_empty(&format!("/supplier/promotions/{}/leave", promotion_id)).await
}

// ============ Debt ============

#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    /// Hosted payment page the overlay sends the supplier to
    pub payment_url: String,
}

/// Start a debt-clearing payment; returns the hosted payment URL
pub async fn initiate_debt_payment() -> Result<PaymentIntent, ApiError> {
    client::post_json("/supplier/debt/pay", &serde_json::json!({})).await
}

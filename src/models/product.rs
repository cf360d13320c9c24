//! Product listings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product as returned by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<String>,
    /// Category-specific attribute selections, keyed by attribute name
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// "active", "draft" or "suspended"
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

/// Payload for creating or updating a product
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    pub stock: u32,
    pub attributes: HashMap<String, String>,
}

impl ProductForm {
    /// Field-level validation mirroring what the server enforces, so the form
    /// can show inline errors without a round trip. Returns
    /// `(field, message)` pairs.
    pub fn validate(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(("name", "Product name is required.".to_string()));
        }
        if self.category.is_empty() {
            errors.push(("category", "Select a category.".to_string()));
        }
        if self.price <= 0.0 {
            errors.push(("price", "Price must be greater than zero.".to_string()));
        }
        if let Some(discounted) = self.discounted_price {
            if discounted >= self.price {
                errors.push((
                    "discounted_price",
                    "Discounted price must be below the regular price.".to_string(),
                ));
            }
        }
        errors
    }
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price: p.price,
            discounted_price: p.discounted_price,
            stock: p.stock,
            attributes: p.attributes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_flags_missing_fields() {
        let form = ProductForm::default();
        let errors = form.validate();
        let fields: Vec<_> = errors.iter().map(|(f, _)| *f).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"category"));
        assert!(fields.contains(&"price"));
    }

    #[test]
    fn validate_rejects_discount_above_price() {
        let form = ProductForm {
            name: "Mug".to_string(),
            category: "home-kitchen".to_string(),
            price: 500.0,
            discounted_price: Some(600.0),
            ..Default::default()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "discounted_price");
    }

    #[test]
    fn validate_accepts_complete_form() {
        let form = ProductForm {
            name: "Mug".to_string(),
            category: "home-kitchen".to_string(),
            price: 500.0,
            stock: 10,
            ..Default::default()
        };
        assert!(form.validate().is_empty());
    }
}

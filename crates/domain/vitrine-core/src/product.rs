use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProductId = String;

/// A catalog item exactly as the product API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub is_trend: bool,
    // The API sends `null` for products without keywords.
    #[serde(default)]
    pub keywords: Option<String>,
    // Only meaningful while `is_trend` is set.
    #[serde(default)]
    pub trending_percentage: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for `POST /product`. The server assigns the id
/// and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

/// Full-replacement payload for `PUT /product/{id}`. Mirrors the
/// creation payload plus the trend fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_percentage: Option<u8>,
}

/// Partial update as callers express it. The API only accepts full
/// replacements, so a patch is merged over the cached entity first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_trend: Option<bool>,
    pub keywords: Option<String>,
    pub trending_percentage: Option<u8>,
}

impl ProductPatch {
    /// Merge this patch over `current` into the complete payload the
    /// API requires.
    pub fn into_update(self, current: &Product) -> UpdateProduct {
        UpdateProduct {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            category: self.category.unwrap_or_else(|| current.category.clone()),
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
            price: self.price.unwrap_or(current.price),
            image_url: self.image_url.unwrap_or_else(|| current.image_url.clone()),
            is_trend: Some(self.is_trend.unwrap_or(current.is_trend)),
            keywords: self.keywords.or_else(|| current.keywords.clone()),
            trending_percentage: self.trending_percentage.or(current.trending_percentage),
        }
    }
}

//! Client-side checks applied before any network call. Violations
//! never reach the store layer.

use crate::product::NewProduct;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),
    #[error("image url is not a valid url: {0}")]
    InvalidImageUrl(String),
}

/// Parse a raw price string into a non-negative finite number.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(raw.to_string()));
    }
    Ok(price)
}

pub fn validate_new_product(product: &NewProduct) -> Result<(), ValidationError> {
    if product.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if product.description.trim().is_empty() {
        return Err(ValidationError::MissingField("description"));
    }
    if product.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category"));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(ValidationError::InvalidPrice(product.price.to_string()));
    }
    // An empty URL is allowed; the placeholder fills it downstream.
    if !product.image_url.is_empty() && url::Url::parse(&product.image_url).is_err() {
        return Err(ValidationError::InvalidImageUrl(product.image_url.clone()));
    }
    Ok(())
}

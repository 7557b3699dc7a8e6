//! Central configuration constants for API defaults and catalog limits.

/// Default base URL of the product API, overridable per invocation.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed `api-version` header value sent with every request.
pub const API_VERSION: &str = "1.0.0";

/// Fallback image reference used when a product row omits one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/300x200?text=Product+Image";

/// Canonical category pick-list offered by interfaces. The wire
/// contract itself accepts any category string.
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing & Apparel",
    "Home & Garden",
    "Health & Beauty",
    "Sports & Outdoors",
    "Books & Media",
    "Toys & Games",
    "Food & Beverages",
    "Automotive",
    "Other",
];

/// Upper bound for a product's trending percentage.
pub const MAX_TRENDING_PERCENTAGE: u8 = 100;

/// Convenience function to clamp a trending percentage into range.
pub fn clamp_trending(v: u8) -> u8 {
    v.min(MAX_TRENDING_PERCENTAGE)
}

//! HTTP client for the product REST API.
//!
//! Every response arrives wrapped in the `{status, message, data}`
//! envelope. All non-2xx responses are uniform failures carrying the
//! HTTP status text; `404` on id-based endpoints gets its own variant
//! so callers can represent absence without string matching.

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use vitrine_core::{NewProduct, Product, ProductId, UpdateProduct};

/// The `{status, message, data}` wrapper every API response uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("product {0} not found")]
    NotFound(ProductId),
    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid api base url {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    fn from_status(status: StatusCode) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            text: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        }
    }
}

/// Seam between the stores and the network. The HTTP implementation
/// below is the production one; tests substitute an in-memory fake.
#[async_trait::async_trait]
pub trait ProductGateway: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError>;
    async fn list(&self) -> Result<Vec<Product>, ApiError>;
    /// `404` maps to [`ApiError::NotFound`].
    async fn fetch(&self, id: &str) -> Result<Product, ApiError>;
    async fn update(&self, id: &str, product: &UpdateProduct) -> Result<Product, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpProductGateway {
    client: Client,
    base: Url,
}

/// Normalize the configured base URL so `join` treats it as a
/// directory. Without the trailing slash, `Url::join("product")`
/// would replace the last path segment instead of appending.
fn normalize_base(base_url: &str) -> Result<Url, ApiError> {
    let mut url =
        Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

impl HttpProductGateway {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client,
            base: normalize_base(base_url)?,
        })
    }

    fn product_url(&self, id: Option<&str>) -> Result<Url, ApiError> {
        let path = match id {
            Some(id) => format!("product/{id}"),
            None => "product".to_string(),
        };
        self.base
            .join(&path)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("accept", "application/json")
            .header("api-version", vitrine_config::API_VERSION)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let bytes = resp.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }

    fn check_status(resp: &reqwest::Response, id: Option<&str>) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        warn!(%status, url = %resp.url(), "product api request failed");
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(ApiError::NotFound(id.to_string()));
            }
        }
        Err(ApiError::from_status(status))
    }
}

#[async_trait::async_trait]
impl ProductGateway for HttpProductGateway {
    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let url = self.product_url(None)?;
        debug!(%url, name = %product.name, "creating product");
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(product)
            .send()
            .await?;
        Self::check_status(&resp, None)?;
        Self::decode(resp).await
    }

    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.product_url(None)?;
        debug!(%url, "listing products");
        let resp = self.request(reqwest::Method::GET, url).send().await?;
        Self::check_status(&resp, None)?;
        Self::decode(resp).await
    }

    async fn fetch(&self, id: &str) -> Result<Product, ApiError> {
        let url = self.product_url(Some(id))?;
        debug!(%url, "fetching product");
        let resp = self.request(reqwest::Method::GET, url).send().await?;
        Self::check_status(&resp, Some(id))?;
        Self::decode(resp).await
    }

    async fn update(&self, id: &str, product: &UpdateProduct) -> Result<Product, ApiError> {
        let url = self.product_url(Some(id))?;
        debug!(%url, "updating product");
        let resp = self
            .request(reqwest::Method::PUT, url)
            .json(product)
            .send()
            .await?;
        Self::check_status(&resp, Some(id))?;
        Self::decode(resp).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.product_url(Some(id))?;
        debug!(%url, "deleting product");
        let resp = self.request(reqwest::Method::DELETE, url).send().await?;
        // No response body is expected on success.
        Self::check_status(&resp, Some(id))?;
        Ok(())
    }
}

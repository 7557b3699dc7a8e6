use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use tracing::warn;

use vitrine_api::{ApiError, ProductGateway};
use vitrine_core::{GenerationProgress, NewProduct, Product, ProductPatch};

/// Snapshot of everything the product views render from.
#[derive(Debug, Clone, Default)]
pub struct ProductState {
    pub products: Vec<Product>,
    pub generation: Option<GenerationProgress>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Single source of truth for the product collection and the only
/// caller of the product API. Handles are cheap clones sharing one
/// state; the lock is never held across an await.
#[derive(Clone)]
pub struct ProductStore {
    inner: Arc<Mutex<ProductState>>,
    gateway: Arc<dyn ProductGateway>,
}

/// Holds `is_loading` true for the duration of one async operation
/// and releases it on every exit path, success or failure.
struct LoadingGuard {
    inner: Arc<Mutex<ProductState>>,
}

impl LoadingGuard {
    fn acquire(inner: &Arc<Mutex<ProductState>>) -> Self {
        inner.lock().unwrap().is_loading = true;
        Self {
            inner: inner.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.is_loading = false;
        }
    }
}

impl ProductStore {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ProductState::default())),
            gateway,
        }
    }

    pub fn state(&self) -> ProductState {
        self.inner.lock().unwrap().clone()
    }

    fn with_state_mut<R>(&self, f: impl FnOnce(&mut ProductState) -> R) -> R {
        let mut guard = self.inner.lock().unwrap();
        f(&mut guard)
    }

    fn find_cached(&self, id: &str) -> Option<Product> {
        let guard = self.inner.lock().unwrap();
        guard.products.iter().find(|p| p.id == id).cloned()
    }

    fn record_failure(&self, message: String) -> anyhow::Error {
        self.with_state_mut(|s| s.error = Some(message.clone()));
        anyhow!(message)
    }

    /// Replace the collection from the server. On failure the cached
    /// collection stays visible (stale but available) and only the
    /// error field changes; the failure is not propagated.
    pub async fn fetch_products(&self) {
        let _loading = LoadingGuard::acquire(&self.inner);
        match self.gateway.list().await {
            Ok(products) => self.with_state_mut(|s| {
                s.products = products;
                s.error = None;
            }),
            Err(e) => {
                warn!(error = %e, "product fetch failed, keeping cached collection");
                self.with_state_mut(|s| s.error = Some(format!("Failed to fetch products: {e}")));
            }
        }
    }

    /// Create a product and append the server-returned entity. The
    /// failure is recorded and re-raised so callers can react.
    pub async fn add_product(&self, input: NewProduct) -> Result<Product> {
        let _loading = LoadingGuard::acquire(&self.inner);
        match self.gateway.create(&input).await {
            Ok(product) => {
                self.with_state_mut(|s| {
                    s.products.push(product.clone());
                    s.error = None;
                });
                Ok(product)
            }
            Err(e) => Err(self.record_failure(format!("Failed to create product: {e}"))),
        }
    }

    /// Merge a partial update over the cached entity and send the
    /// full replacement the API requires. Errors if the id is not
    /// cached: an update implies the caller believed it existed.
    pub async fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product> {
        let _loading = LoadingGuard::acquire(&self.inner);
        let Some(current) = self.find_cached(id) else {
            return Err(self.record_failure(format!("Product {id} not found")));
        };

        let payload = patch.into_update(&current);
        match self.gateway.update(id, &payload).await {
            Ok(updated) => {
                self.with_state_mut(|s| {
                    if let Some(ix) = s.products.iter().position(|p| p.id == id) {
                        s.products[ix] = updated.clone();
                    }
                    s.error = None;
                });
                Ok(updated)
            }
            Err(e) => Err(self.record_failure(format!("Failed to update product: {e}"))),
        }
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        let _loading = LoadingGuard::acquire(&self.inner);
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.with_state_mut(|s| {
                    s.products.retain(|p| p.id != id);
                    s.error = None;
                });
                Ok(())
            }
            Err(e) => Err(self.record_failure(format!("Failed to delete product: {e}"))),
        }
    }

    /// Cached entity if present, otherwise a network fetch. Absence
    /// on the server is an ordinary `None`, not an error.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>> {
        let _loading = LoadingGuard::acquire(&self.inner);
        if let Some(found) = self.find_cached(id) {
            return Ok(Some(found));
        }

        match self.gateway.fetch(id).await {
            Ok(product) => {
                self.with_state_mut(|s| {
                    // A concurrent call may have cached it meanwhile.
                    if !s.products.iter().any(|p| p.id == product.id) {
                        s.products.push(product.clone());
                    }
                });
                Ok(Some(product))
            }
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(self.record_failure(format!("Failed to fetch product: {e}"))),
        }
    }

    pub fn set_generation_progress(&self, progress: Option<GenerationProgress>) {
        self.with_state_mut(|s| s.generation = progress);
    }

    pub fn clear_error(&self) {
        self.with_state_mut(|s| s.error = None);
    }
}

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use vitrine_api::{ApiError, ProductGateway};
use vitrine_core::{NewProduct, Product, UpdateProduct};

/// In-memory stand-in for the product API. `fail_with` makes every
/// subsequent call fail with a 500 until `heal` is called.
#[derive(Default)]
pub struct FakeGateway {
    products: Mutex<Vec<Product>>,
    next_id: AtomicU64,
    outage: Mutex<Option<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.outage.lock().unwrap() = Some(message.to_string());
    }

    pub fn heal(&self) {
        *self.outage.lock().unwrap() = None;
    }

    pub fn stored(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn check_outage(&self) -> Result<(), ApiError> {
        match self.outage.lock().unwrap().as_ref() {
            Some(text) => Err(ApiError::Status {
                status: 500,
                text: text.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ProductGateway for FakeGateway {
    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.check_outage()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let created = Product {
            id: format!("p-{id}"),
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            is_trend: false,
            keywords: product.keywords.clone(),
            trending_percentage: None,
            created_at: now,
            updated_at: now,
        };
        self.products.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.check_outage()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn fetch(&self, id: &str) -> Result<Product, ApiError> {
        self.check_outage()?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, product: &UpdateProduct) -> Result<Product, ApiError> {
        self.check_outage()?;
        let mut guard = self.products.lock().unwrap();
        let Some(existing) = guard.iter_mut().find(|p| p.id == id) else {
            return Err(ApiError::NotFound(id.to_string()));
        };
        existing.name = product.name.clone();
        existing.category = product.category.clone();
        existing.description = product.description.clone();
        existing.price = product.price;
        existing.image_url = product.image_url.clone();
        existing.is_trend = product.is_trend.unwrap_or(existing.is_trend);
        existing.keywords = product.keywords.clone().or_else(|| existing.keywords.clone());
        existing.trending_percentage = product
            .trending_percentage
            .or(existing.trending_percentage);
        existing.updated_at = Utc::now();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.check_outage()?;
        let mut guard = self.products.lock().unwrap();
        let before = guard.len();
        guard.retain(|p| p.id != id);
        if guard.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

pub fn sample_product(id: &str, name: &str) -> Product {
    let now = Utc::now();
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: "Electronics".into(),
        description: "d".into(),
        price: 9.99,
        image_url: "http://x/y.png".into(),
        is_trend: false,
        keywords: None,
        trending_percentage: None,
        created_at: now,
        updated_at: now,
    }
}

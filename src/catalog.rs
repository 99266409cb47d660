use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{event, Level};

use crate::domain::Product;
use crate::errors::StorefrontError;
use crate::payments::{CatalogGateway, ProductListObject};

/// The product list served between two revalidation cycles.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub fetched_at: DateTime<Utc>,
}

/// Maps a provider listing into the local product records, in listing order.
/// A listed item without a usable price fails the whole mapping; there is no
/// partial-product fallback.
pub fn map_products(listing: &ProductListObject) -> Result<Vec<Product>, StorefrontError> {
    let mut products = Vec::with_capacity(listing.data.len());

    for item in &listing.data {
        let unit_amount = match item.default_price.unit_amount {
            Some(amount) => amount,
            None => return Err(StorefrontError::MissingPrice(item.id.clone())),
        };

        if unit_amount < 0 {
            return Err(StorefrontError::NegativePrice {
                product_id: item.id.clone(),
                unit_amount,
            });
        }

        products.push(Product {
            id: item.id.clone(),
            name: item.name.clone(),
            image_url: item.images.first().cloned().unwrap_or_default(),
            default_price_id: item.default_price.id.clone(),
            currency: item.default_price.currency.clone(),
            unit_amount,
            price: unit_amount as f64 / 100.0,
        });
    }

    Ok(products)
}

/// Holds the current catalog snapshot and refreshes it from the payments
/// provider on demand.
pub struct CatalogCache {
    gateway: Arc<dyn CatalogGateway>,
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogCache {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        CatalogCache {
            gateway,
            snapshot: RwLock::new(Arc::new(CatalogSnapshot {
                products: Vec::new(),
                fetched_at: Utc::now(),
            })),
        }
    }

    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Runs the catalog loader once and swaps in the fresh snapshot.
    /// On failure the previous snapshot stays in place and keeps serving.
    pub async fn revalidate(&self) -> Result<(), StorefrontError> {
        let listing = self.gateway.list_products().await?;
        let products = map_products(&listing)?;

        let fresh = Arc::new(CatalogSnapshot {
            products,
            fetched_at: Utc::now(),
        });

        let mut lock = self.snapshot.write().await;
        *lock = fresh;
        event!(
            Level::INFO,
            "catalog snapshot replaced, {} products listed at {}",
            lock.products.len(),
            lock.fetched_at
        );
        Ok(())
    }
}

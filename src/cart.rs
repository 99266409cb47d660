use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::Product;

/// The shared cart collaborator: accepts a product and stores it as "the
/// item to add". Dedup and checkout policy live with the cart service, not
/// here.
#[async_trait]
pub trait CartContext: Send + Sync {
    async fn add(&self, product: Product);
    async fn items(&self) -> Vec<Product>;
}

#[derive(Clone)]
pub struct InMemoryCartContext {
    items: Arc<Mutex<Vec<Product>>>,
}

impl InMemoryCartContext {
    pub fn new() -> Self {
        InMemoryCartContext {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CartContext for InMemoryCartContext {
    async fn add(&self, product: Product) {
        let mut lock = self.items.lock().await;
        lock.push(product);
    }

    async fn items(&self) -> Vec<Product> {
        let lock = self.items.lock().await;
        lock.clone()
    }
}

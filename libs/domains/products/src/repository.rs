use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// Every method maps to exactly one statement against the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// All products, ordered by id ascending
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// `None` when no product has this id
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Overwrite all fields; `ProductError::NotFound` when no row matched
    async fn update_by_id(&self, id: i32, input: ProductInput) -> ProductResult<Product>;

    /// `ProductError::NotFound` when no row matched
    async fn delete_by_id(&self, id: i32) -> ProductResult<()>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                products: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Database("product id sequence exhausted".to_string()))?;
        store.last_id = id;

        let product = Product::from_input(id, input);
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update_by_id(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.replace(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let mut store = self.store.write().await;

        store
            .products
            .remove(&id)
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}

use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Message returned when a create or update fails inside the store
pub const REJECTED_BODY: &str = "Error in request body";

/// Service layer for Product operations
///
/// Decides which HTTP-facing error a store failure becomes: writes that
/// carry a body (create, update) report it as a rejected request, while
/// reads and deletes report it as a server error.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.repository
            .create(input)
            .await
            .map_err(reject_store_failure)
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        self.repository
            .update_by_id(id, input)
            .await
            .map_err(reject_store_failure)
    }

    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }
}

fn reject_store_failure(err: ProductError) -> ProductError {
    match err {
        ProductError::Database(details) => {
            tracing::warn!(error = %details, "Store rejected product write");
            ProductError::Validation(REJECTED_BODY.to_string())
        }
        other => other,
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// PostgreSQL-backed repository over an injected SeaORM connection pool.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn update_by_id(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let model = entity::ActiveModel::replacing(id, input)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str, price: f64) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            price,
            description: format!("{name} description"),
        }
    }

    fn input(name: &str, price: f64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
            description: format!("{name} description"),
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Teclado", 12.5)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.create(input("Teclado", 12.5)).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Teclado");
        assert_eq!(product.price, 12.5);
    }

    #[tokio::test]
    async fn test_create_store_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("value too long".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.create(input("Teclado", 12.5)).await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Teclado", 12.5), model(2, "Mouse", 5.0)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.find_all().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Mouse");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_returns_new_values() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Mouse", 7.5)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.update_by_id(3, input("Mouse", 7.5)).await.unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.price, 7.5);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.update_by_id(99, input("Mouse", 7.5)).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_update_other_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.update_by_id(3, input("Mouse", 7.5)).await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn test_delete_by_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete_by_id(4).await.is_ok());
        assert!(matches!(
            repo.delete_by_id(4).await.unwrap_err(),
            ProductError::NotFound(4)
        ));
    }
}

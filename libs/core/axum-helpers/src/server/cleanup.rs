//! Connection cleanup run after the server stops accepting requests.

use tracing::{error, info};

/// Close a SeaORM pool, logging the outcome under `name`.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL connection '{}' closed", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_close_mock_connection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        close_postgres(db, "test").await;
    }
}

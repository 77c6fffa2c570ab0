//! Server infrastructure: router assembly with API documentation, the
//! liveness endpoint and graceful shutdown with connection cleanup.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), async move {
//!     close_postgres(db, "main").await;
//! })
//! .await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{
    OPENAPI_JSON_PATH, build_router, create_production_app, create_router, serve_until_shutdown,
};
pub use cleanup::close_postgres;
pub use health::{HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};

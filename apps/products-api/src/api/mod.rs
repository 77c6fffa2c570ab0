//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Creates the product routes. The returned router is stateless; every
/// sub-router already carries its service.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Router with the `/ready` probe, merged next to `/health` by `main`.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

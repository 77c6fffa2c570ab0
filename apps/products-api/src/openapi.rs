//! OpenAPI documentation configuration

use axum_helpers::errors::responses::ServiceUnavailableResponse;
use utoipa::OpenApi;

use crate::api::health::{self, ReadyResponse};

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        description = "CRUD API for products stored in PostgreSQL through SeaORM",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(health::ready_handler),
    components(
        schemas(ReadyResponse),
        responses(ServiceUnavailableResponse)
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = health::TAG, description = "Operational probes")
    )
)]
pub struct ApiDoc;

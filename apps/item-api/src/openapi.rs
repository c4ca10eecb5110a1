//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item API",
        version = "0.1.0",
        description = "Showcase REST API for a single item resource (JSON and XML)",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/item", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Showcase item endpoints")
    )
)]
pub struct ApiDoc;

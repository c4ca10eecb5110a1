//! API routes module

use axum::Router;
use domain_items::{ItemService, handlers};

use crate::config::Config;

/// Create all API routes.
/// Merged at the root by `axum_helpers::create_router`.
pub fn routes(config: &Config) -> Router {
    let service = ItemService::new(config.created_view);

    Router::new().nest("/item", handlers::router(service))
}

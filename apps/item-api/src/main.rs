use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let api_routes = api::routes(&config);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints
    let app = router.merge(health_router(config.app));

    info!(
        created_view = %config.created_view,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Item API shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = temp_env::with_vars_unset(["APP_ENV", "HOST", "PORT", "ITEM_CREATED_VIEW"], || {
            Config::from_env().unwrap()
        });
        create_router::<openapi::ApiDoc>(api::routes(&config)).merge(health_router(config.app))
    }

    #[tokio::test]
    async fn test_item_is_served_at_item_path() {
        let response = app()
            .oneshot(Request::builder().uri("/item").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], "Plaid polaire");
        assert_eq!(body["code"], "1238931");
        assert_eq!(body["quantity"], 3);
    }

    #[tokio::test]
    async fn test_delete_is_served_at_item_path() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/item?id=12")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Item with id : 12 deleted");
    }

    #[tokio::test]
    async fn test_create_location_uses_api_prefix() {
        let request = Request::builder()
            .method("POST")
            .uri("/item")
            .header(header::HOST, "localhost:8080")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Plaid polaire","code":"1238931","quantity":3}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            "http://localhost:8080/api/item/1238931"
        );
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_binary() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], "item_api");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_item_path() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["paths"].get("/item").is_some());
    }
}

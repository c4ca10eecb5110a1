use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use axum_helpers::{
    Accept, JsonOnly, JsonOrXml, Negotiated,
    errors::responses::{InternalServerErrorResponse, NotAcceptableResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{DeleteItemParams, Item, ItemRepresentation, ItemSummary, ItemView};
use crate::service::ItemService;

/// OpenAPI documentation for the Item API
#[derive(OpenApi)]
#[openapi(
    paths(get_item, create_item, delete_item),
    components(
        schemas(Item, ItemSummary, ItemRepresentation, ItemView),
        responses(NotAcceptableResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Showcase item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the item router. Mount it at `/item`.
pub fn router(service: ItemService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_item).post(create_item).delete(delete_item))
        .with_state(shared_service)
}

/// Get the showcase item
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "The showcase item, as JSON or XML (`Accept: application/xml`)", body = Item),
        (status = 406, response = NotAcceptableResponse)
    )
)]
async fn get_item(
    State(service): State<Arc<ItemService>>,
    Accept(media_type, _): Accept<JsonOrXml>,
) -> Negotiated<Item> {
    Negotiated::new(media_type, service.get_item())
}

/// Create an item
///
/// Nothing is stored: the item is echoed back with its location.
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = ItemRepresentation,
            headers(("Location" = String, description = "URI of the created item"))),
        (status = 400, description = "Body is not a valid item", body = String, content_type = "text/plain"),
        (status = 406, response = NotAcceptableResponse),
        (status = 415, description = "Content-Type is not application/json"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item(
    State(service): State<Arc<ItemService>>,
    _accept: Accept<JsonOnly>,
    uri: Uri,
    headers: HeaderMap,
    WithRejection(Json(item), _): WithRejection<Json<Item>, ItemError>,
) -> ItemResult<impl IntoResponse> {
    let origin = request_origin(&uri, &headers);
    let created = service.create_item(item, origin.as_deref());

    let location = HeaderValue::from_str(&created.location)
        .map_err(|e| ItemError::Internal(format!("Invalid location header: {}", e)))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.body),
    ))
}

/// Delete an item
///
/// Only confirms the request; there is no backing store.
#[utoipa::path(
    delete,
    path = "",
    tag = "Items",
    params(DeleteItemParams),
    responses(
        (status = 200, description = "Deletion confirmation", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing `id` query parameter", body = String, content_type = "text/plain")
    )
)]
async fn delete_item(
    State(service): State<Arc<ItemService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ItemResult<String> {
    let params = DeleteItemParams::from_query(pairs).ok_or(ItemError::MissingParameter("id"))?;
    Ok(service.delete_item(&params.id))
}

/// `scheme://authority` of the request, from an absolute URI or the `Host` header.
fn request_origin(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    if let Some(authority) = uri.authority() {
        let scheme = uri.scheme_str().unwrap_or("http");
        return Some(format!("{}://{}", scheme, authority));
    }

    headers
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(|host| format!("http://{}", host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_origin_prefers_absolute_uri() {
        let uri: Uri = "https://shop.example:8443/item".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("ignored"));

        assert_eq!(
            request_origin(&uri, &headers).as_deref(),
            Some("https://shop.example:8443")
        );
    }

    #[test]
    fn test_request_origin_uses_host_header() {
        let uri: Uri = "/item".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));

        assert_eq!(
            request_origin(&uri, &headers).as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_request_origin_absent_without_host() {
        let uri: Uri = "/item".parse().unwrap();
        assert_eq!(request_origin(&uri, &HeaderMap::new()), None);
    }
}

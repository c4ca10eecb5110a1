//! Items Domain
//!
//! A single showcase resource exposed at `/item`: a fixed read endpoint with
//! JSON/XML negotiation, an echoing create endpoint and a confirming delete
//! endpoint. Nothing is persisted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, content negotiation, body rejections
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← showcase item, location URIs, creation view
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, views, query params
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_items::{handlers, ItemService, ItemView};
//!
//! let service = ItemService::new(ItemView::WithoutQuantity);
//! let app: Router = Router::new().nest("/item", handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{DeleteItemParams, Item, ItemRepresentation, ItemSummary, ItemView};
pub use service::{CreatedItem, ItemService};

//! Item Service - request-scoped operations behind the HTTP handlers

use tracing::{debug, instrument};

use crate::models::{Item, ItemRepresentation, ItemView};

/// Template of the location URI returned for a created item
pub const ITEM_LOCATION_TEMPLATE: &str = "/api/item/{code}";

const SHOWCASE_NAME: &str = "Plaid polaire";
const SHOWCASE_CODE: &str = "1238931";
const SHOWCASE_QUANTITY: i32 = 3;

/// Result of a create operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedItem {
    /// Value for the `Location` header
    pub location: String,
    /// Body, already projected through the configured view
    pub body: ItemRepresentation,
}

/// Item service.
///
/// Holds no state besides the view applied to creation responses; every
/// operation is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct ItemService {
    created_view: ItemView,
}

impl ItemService {
    pub fn new(created_view: ItemView) -> Self {
        Self { created_view }
    }

    /// The fixed showcase item
    #[instrument(skip(self))]
    pub fn get_item(&self) -> Item {
        Item::new(SHOWCASE_NAME, SHOWCASE_CODE, SHOWCASE_QUANTITY)
    }

    /// Echo the submitted item with its location.
    ///
    /// `origin` is `scheme://authority` of the request when known; without it
    /// the location is a bare path.
    #[instrument(skip(self, item), fields(item_code = %item.code, view = %self.created_view))]
    pub fn create_item(&self, item: Item, origin: Option<&str>) -> CreatedItem {
        let location = location_for(origin, item.code());
        debug!(%location, "Item created");

        CreatedItem {
            location,
            body: item.into_view(self.created_view),
        }
    }

    /// Confirmation message for a delete request. Nothing is removed.
    #[instrument(skip(self))]
    pub fn delete_item(&self, id: &str) -> String {
        format!("Item with id : {} deleted", id)
    }
}

/// Expand [`ITEM_LOCATION_TEMPLATE`] with `code` percent-encoded as a path segment.
pub fn location_for(origin: Option<&str>, code: &str) -> String {
    let path = ITEM_LOCATION_TEMPLATE.replace("{code}", &urlencoding::encode(code));
    match origin {
        Some(origin) => format!("{}{}", origin.trim_end_matches('/'), path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemSummary;

    #[test]
    fn test_get_item_returns_showcase_item() {
        let service = ItemService::default();
        let item = service.get_item();

        assert_eq!(item.name(), "Plaid polaire");
        assert_eq!(item.code(), "1238931");
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn test_get_item_is_stable_across_calls() {
        let service = ItemService::default();
        assert_eq!(service.get_item(), service.get_item());
    }

    #[test]
    fn test_default_created_view_omits_quantity() {
        let service = ItemService::default();
        let created = service.create_item(Item::new("X", "42", 5), None);

        assert_eq!(created.location, "/api/item/42");
        assert_eq!(
            created.body,
            ItemRepresentation::WithoutQuantity(ItemSummary {
                name: "X".to_string(),
                code: "42".to_string(),
            })
        );
    }

    #[test]
    fn test_full_created_view_keeps_quantity() {
        let service = ItemService::new(ItemView::Full);
        let created = service.create_item(Item::new("X", "42", 5), Some("http://localhost:8080"));

        assert_eq!(created.location, "http://localhost:8080/api/item/42");
        assert_eq!(created.body, ItemRepresentation::Full(Item::new("X", "42", 5)));
    }

    #[test]
    fn test_location_encodes_code_as_path_segment() {
        assert_eq!(location_for(None, "a b/c"), "/api/item/a%20b%2Fc");
        assert_eq!(location_for(None, ""), "/api/item/");
        assert_eq!(
            location_for(Some("http://shop.local/"), "7"),
            "http://shop.local/api/item/7"
        );
    }

    #[test]
    fn test_delete_item_echoes_id() {
        let service = ItemService::default();
        assert_eq!(service.delete_item("7"), "Item with id : 7 deleted");
        assert_eq!(service.delete_item(""), "Item with id :  deleted");
    }
}

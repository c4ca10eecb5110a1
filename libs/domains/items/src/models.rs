use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

/// Serialization view of an item.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemView {
    /// name, code and quantity
    Full,
    /// name and code only
    #[default]
    WithoutQuantity,
}

/// Item entity.
///
/// No field is validated. Absent or `null` fields in a request body take
/// their default (empty string, zero).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Item code, used as the resource identifier in location URIs
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Quantity in stock
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i32,
}

/// Item without its quantity, returned by the creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemSummary {
    pub name: String,
    pub code: String,
}

/// An item serialized through one of the [`ItemView`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ItemRepresentation {
    Full(Item),
    WithoutQuantity(ItemSummary),
}

/// Query parameters of the delete endpoint
#[derive(Debug, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteItemParams {
    /// Identifier of the item to delete. Repeated values are joined with `,`.
    pub id: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn new(name: impl Into<String>, code: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    /// Project the item into the given view
    pub fn into_view(self, view: ItemView) -> ItemRepresentation {
        match view {
            ItemView::Full => ItemRepresentation::Full(self),
            ItemView::WithoutQuantity => ItemRepresentation::WithoutQuantity(self.into()),
        }
    }
}

impl DeleteItemParams {
    /// Collect `id` from decoded query pairs. `None` when no `id` is present.
    pub fn from_query(pairs: Vec<(String, String)>) -> Option<Self> {
        let ids: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "id")
            .map(|(_, value)| value)
            .collect();

        (!ids.is_empty()).then(|| Self { id: ids.join(",") })
    }
}

impl From<Item> for ItemSummary {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            code: item.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_item_accessors_and_mutators() {
        let mut item = Item::default();
        item.set_name("Lampe");
        item.set_code("77");
        item.set_quantity(-4);

        assert_eq!(item.name(), "Lampe");
        assert_eq!(item.code(), "77");
        assert_eq!(item.quantity(), -4);
        assert_eq!(item, Item::new("Lampe", "77", -4));
    }

    #[test]
    fn test_item_deserializes_missing_and_null_fields_as_defaults() {
        let item: Item = serde_json::from_value(json!({"code": "9", "name": null})).unwrap();
        assert_eq!(item, Item::new("", "9", 0));
    }

    #[test]
    fn test_item_ignores_unknown_fields() {
        let item: Item =
            serde_json::from_value(json!({"name": "X", "code": "1", "colour": "red"})).unwrap();
        assert_eq!(item.name, "X");
    }

    #[test]
    fn test_item_rejects_wrong_field_type() {
        let result = serde_json::from_value::<Item>(json!({"quantity": "three"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_full_view_keeps_quantity() {
        let value =
            serde_json::to_value(Item::new("X", "42", 5).into_view(ItemView::Full)).unwrap();
        assert_eq!(value, json!({"name": "X", "code": "42", "quantity": 5}));
    }

    #[test]
    fn test_without_quantity_view_omits_quantity() {
        let value = serde_json::to_value(Item::new("X", "42", 5).into_view(ItemView::WithoutQuantity))
            .unwrap();
        assert_eq!(value, json!({"name": "X", "code": "42"}));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_delete_params_single_id() {
        let params = DeleteItemParams::from_query(pairs(&[("id", "7")])).unwrap();
        assert_eq!(params.id, "7");
    }

    #[test]
    fn test_delete_params_join_repeated_ids() {
        let params =
            DeleteItemParams::from_query(pairs(&[("id", "7"), ("other", "x"), ("id", "8")])).unwrap();
        assert_eq!(params.id, "7,8");
    }

    #[test]
    fn test_delete_params_missing_id() {
        assert_eq!(DeleteItemParams::from_query(pairs(&[("other", "x")])), None);
        assert_eq!(DeleteItemParams::from_query(Vec::new()), None);
    }

    #[test]
    fn test_item_view_parsing() {
        assert_eq!(ItemView::from_str("full").unwrap(), ItemView::Full);
        assert_eq!(
            ItemView::from_str("WITHOUT_QUANTITY").unwrap(),
            ItemView::WithoutQuantity
        );
        assert!(ItemView::from_str("partial").is_err());
        assert_eq!(ItemView::default().to_string(), "without_quantity");
    }

    #[test]
    fn test_item_serializes_to_xml_with_item_root() {
        let xml = quick_xml::se::to_string(&Item::new("Plaid polaire", "1238931", 3)).unwrap();
        assert_eq!(
            xml,
            "<Item><name>Plaid polaire</name><code>1238931</code><quantity>3</quantity></Item>"
        );
    }
}

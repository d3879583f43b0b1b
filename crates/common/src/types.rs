use serde::{Deserialize, Serialize};

/// Path prefix reserved for API routes. Everything else belongs to the SPA.
pub const API_PREFIX: &str = "/api";

/// Path of the items resource.
pub const ITEMS_PATH: &str = "/api/items";

/// The fixed item catalog, in display order.
pub const ITEM_NAMES: [&str; 3] = ["Item1", "Item2", "Item3"];

/// A single displayable item.
///
/// Wraps a plain string so items can't be confused with other text
/// (paths, error messages) passing through the same code. Serializes as a
/// bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Returns the item text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.0
    }
}

/// Returns the item catalog as owned items, in stable order.
pub fn catalog() -> Vec<Item> {
    ITEM_NAMES.iter().copied().map(Item::from).collect()
}

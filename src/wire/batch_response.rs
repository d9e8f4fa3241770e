use serde::{Deserialize, Serialize};

use serde_json::{Map, Value};

/// The outcome of one item of a combined exchange. Extra members sent
/// by some servers (`key`, `header`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub code: u16,
    #[serde(default)]
    pub body: Value,
}

/// Body of a combined exchange: a mapping from positional key to item.
/// Items are decoded one at a time, so a malformed item only affects
/// its own key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResponse {
    items: Map<String, Value>,
}

impl BatchResponse {
    /// Fails only if `value` is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn insert(&mut self, key: String, item: ItemResponse) {
        self.items.insert(
            key,
            serde_json::json!({ "code": item.code, "body": item.body }),
        );
    }

    /// Removes and decodes the item keyed by `key`: each item is
    /// handed out at most once.
    pub fn take(&mut self, key: &str) -> Option<Result<ItemResponse, serde_json::Error>> {
        self.items.remove(key).map(serde_json::from_value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

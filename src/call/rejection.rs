use serde::{Deserialize, Serialize};

use serde_json::Value;

/// A non-success answer to one call: the status code and the body
/// the remote returned with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub code: u16,
    pub body: Value,
}

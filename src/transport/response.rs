use serde::{Deserialize, Serialize};

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub code: u16,
    pub body: Value,
}

impl Response {
    pub fn new(code: u16, body: Value) -> Self {
        Response { code, body }
    }
}

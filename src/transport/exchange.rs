use serde::{Deserialize, Serialize};

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
}

/// One request/response round trip, as handed to a `Transport`.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub method: Method,
    pub address: String,
    pub payload: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl Exchange {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

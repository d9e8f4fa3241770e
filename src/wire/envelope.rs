use serde::{Deserialize, Serialize};

use serde_json::Value;

use std::collections::BTreeMap;

/// One item of a combined request: either a bare address (read-only
/// form) or a structured `{region, path, args}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeEntry {
    Address(String),
    Structured {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        region: Option<String>,
        path: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        args: Option<Value>,
    },
}

/// The wire form of a batch: positional key (`"0"`, `"1"`, ..) to entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope {
    entries: BTreeMap<String, EnvelopeEntry>,
}

impl Envelope {
    pub fn new() -> Self {
        Envelope::default()
    }

    pub fn key(index: usize) -> String {
        index.to_string()
    }

    pub fn push(&mut self, entry: EnvelopeEntry) -> String {
        let key = Envelope::key(self.entries.len());
        self.entries.insert(key.clone(), entry);
        key
    }

    pub fn get(&self, index: usize) -> Option<&EnvelopeEntry> {
        self.entries.get(&Envelope::key(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_value(&self) -> Value {
        // Keys are strings and entries plain data, so this is infallible
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn keys_follow_insertion_order() {
        let mut envelope = Envelope::new();

        for index in 0..12 {
            let key = envelope.push(EnvelopeEntry::Address(format!("/item/{}", index)));
            assert_eq!(key, index.to_string());
        }

        assert_eq!(envelope.len(), 12);
        assert_eq!(
            envelope.get(10),
            Some(&EnvelopeEntry::Address("/item/10".to_string()))
        );
    }

    #[test]
    fn wire_shapes() {
        let mut envelope = Envelope::new();

        envelope.push(EnvelopeEntry::Address("/api/v1/a".to_string()));
        envelope.push(EnvelopeEntry::Structured {
            region: Some("use".to_string()),
            path: "/api/v1/b".to_string(),
            args: Some(json!({"shard": 1})),
        });
        envelope.push(EnvelopeEntry::Structured {
            region: None,
            path: "/api/v1/c".to_string(),
            args: None,
        });

        assert_eq!(
            envelope.to_value(),
            json!({
                "0": "/api/v1/a",
                "1": {"region": "use", "path": "/api/v1/b", "args": {"shard": 1}},
                "2": {"path": "/api/v1/c"},
            })
        );
    }
}

//! In-memory search-index document.

use fieldcast_graph::DocumentWriter;
use serde_json::{Map, Value, json};

/// A [`DocumentWriter`] that keeps fields in insertion order for
/// assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    fields: Vec<(String, String)>,
}

impl MemoryDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// All values added under `name`, in insertion order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Total number of (name, value) fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been added.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON snapshot: field name → array of values, multi-valued fields in
    /// insertion order.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            map.entry(name.clone())
                .or_insert_with(|| json!([]))
                .as_array_mut()
                .expect("snapshot arrays")
                .push(json!(value));
        }
        Value::Object(map)
    }
}

impl DocumentWriter for MemoryDocument {
    fn add_field(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }
}

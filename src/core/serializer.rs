//! Element to JSON serialization

use crate::core::element::{Element, Properties};
use anyhow::Result;
use serde_json::{Map, Value};

pub const ID: &str = "_id";
pub const TYPE: &str = "_type";
pub const LABEL: &str = "_label";
pub const OUT_V: &str = "_outV";
pub const IN_V: &str = "_inV";

const RESERVED_KEYS: &[&str] = &[ID, TYPE, LABEL, OUT_V, IN_V];

/// Turns an element into its structured JSON representation
pub trait ElementSerializer: Send + Sync {
    fn serialize(&self, element: &Element) -> Result<Value>;
}

/// Flat JSON object: reserved `_`-prefixed keys followed by the properties
///
/// ```text
/// {"_id": 7, "_type": "edge", "_label": "knows", "_outV": 1, "_inV": 2, "weight": 0.5}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonElementSerializer;

impl ElementSerializer for JsonElementSerializer {
    fn serialize(&self, element: &Element) -> Result<Value> {
        let mut object = Map::new();
        object.insert(ID.to_string(), serde_json::to_value(element.id())?);
        object.insert(TYPE.to_string(), Value::from(element.kind().as_str()));

        if let Element::Edge(edge) = element {
            object.insert(LABEL.to_string(), Value::from(edge.label.as_str()));
            object.insert(OUT_V.to_string(), serde_json::to_value(&edge.out_vertex)?);
            object.insert(IN_V.to_string(), serde_json::to_value(&edge.in_vertex)?);
        }

        append_properties(&mut object, element.properties());
        Ok(Value::Object(object))
    }
}

fn append_properties(object: &mut Map<String, Value>, properties: &Properties) {
    for (key, value) in properties {
        if RESERVED_KEYS.contains(&key.as_str()) {
            tracing::debug!(key = %key, "skipping property shadowing a reserved key");
            continue;
        }
        object.insert(key.clone(), value.clone());
    }
}

//! JSON-safe serialization of synthesized values.
//!
//! Function placeholders cannot cross a JSON boundary, so they are encoded as
//! tagged records `{"kind": "function", "name": ...}`. Deserialization is the
//! structural inverse: the name tag survives the round trip, the callable's
//! identity does not.

use serde_json::{Map, Number, Value, json};

use crate::core::value::{EnumValue, MockValue, PropsBundle};

/// Convert a value tree into a JSON-safe tree.
pub fn to_json(value: &MockValue) -> Value {
    match value {
        MockValue::String(s) => Value::String(s.clone()),
        MockValue::Number(n) => Value::Number(json_number(*n)),
        MockValue::Bool(b) => Value::Bool(*b),
        MockValue::Null => Value::Null,
        MockValue::Array(items) => Value::Array(items.iter().map(to_json).collect()),
        MockValue::Object(fields) => {
            let mut map = Map::new();
            for (name, value) in fields {
                map.insert(name.clone(), to_json(value));
            }
            Value::Object(map)
        }
        MockValue::Function { name } => json!({ "kind": "function", "name": name }),
    }
}

/// Structural inverse of `to_json`.
///
/// A record shaped exactly `{"kind": "function", "name": ...}` becomes a
/// function placeholder again; any other record stays a plain object.
pub fn from_json(value: &Value) -> MockValue {
    match value {
        Value::String(s) => MockValue::String(s.clone()),
        Value::Number(n) => MockValue::Number(n.as_f64().unwrap_or(0.0)),
        Value::Bool(b) => MockValue::Bool(*b),
        Value::Null => MockValue::Null,
        Value::Array(items) => MockValue::Array(items.iter().map(from_json).collect()),
        Value::Object(map) => {
            if let Some(name) = function_tag(map) {
                return MockValue::Function { name };
            }
            MockValue::Object(
                map.iter()
                    .map(|(name, value)| (name.clone(), from_json(value)))
                    .collect(),
            )
        }
    }
}

fn function_tag(map: &Map<String, Value>) -> Option<String> {
    if map.len() != 2 {
        return None;
    }
    if map.get("kind")?.as_str()? != "function" {
        return None;
    }
    Some(map.get("name")?.as_str()?.to_string())
}

/// Serialize a whole props bundle for the external serving layer:
/// `{ "props": ..., "enums": { field: [{ "name": ..., "value": ... }] } }`.
pub fn serialize_props(bundle: &PropsBundle) -> Value {
    let mut enums = Map::new();
    for (field, descriptor) in &bundle.enums {
        let members: Vec<Value> = descriptor
            .members
            .iter()
            .map(|m| {
                let value = match &m.value {
                    EnumValue::Str(s) => Value::String(s.clone()),
                    EnumValue::Int(i) => Value::Number((*i).into()),
                };
                json!({ "name": m.name, "value": value })
            })
            .collect();
        enums.insert(field.clone(), Value::Array(members));
    }

    json!({
        "props": to_json(&bundle.value),
        "enums": Value::Object(enums),
    })
}

/// Integral floats serialize as plain integers for readability.
fn json_number(n: f64) -> Number {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        Number::from(n as i64)
    } else {
        Number::from_f64(n).unwrap_or_else(|| Number::from(0))
    }
}

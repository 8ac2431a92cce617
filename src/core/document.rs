//! Purpose: Translate a decoded YAML document into a JSON value.
//! Exports: `to_json`, `key_to_string`.
//! Role: Pure mapping step between the YAML decoder and the JSON encoder.
//! Invariants: Input is never mutated; mapping order is carried over unchanged.
//! Invariants: Values without a JSON form fail with `Encode`; explicit tags fail with `Decode`.
//! Invariants: Distinct keys that stringify to the same JSON key fail with `Encode`, never overwrite.
use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use serde_yaml::{Number as YamlNumber, Value as YamlValue, value::TaggedValue};

use crate::core::error::{Error, ErrorKind};
use crate::yaml::parse::hint_for_message;

pub fn to_json(value: &YamlValue) -> Result<JsonValue, Error> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(val) => Ok(JsonValue::Bool(*val)),
        YamlValue::Number(num) => number_to_json(num).map(JsonValue::Number),
        YamlValue::String(text) => Ok(JsonValue::String(text.clone())),
        YamlValue::Sequence(items) => items
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let name = key_to_string(key)?;
                if object.contains_key(&name) {
                    return Err(key_collision_error(&name));
                }
                object.insert(name, to_json(value)?);
            }
            Ok(JsonValue::Object(object))
        }
        YamlValue::Tagged(tagged) => Err(tag_error(tagged)),
    }
}

/// Stringifies a mapping key the way JSON encoders coerce non-string dictionary keys.
pub fn key_to_string(key: &YamlValue) -> Result<String, Error> {
    match key {
        YamlValue::String(text) => Ok(text.clone()),
        YamlValue::Number(num) => number_to_json(num).map(|num| num.to_string()),
        YamlValue::Bool(val) => Ok(val.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(Error::new(ErrorKind::Encode)
            .with_message("mapping key must be a scalar to be used as a JSON object key")
            .with_hint("Rewrite the complex (`? `) key as a plain string.")),
        YamlValue::Tagged(tagged) => Err(tag_error(tagged)),
    }
}

fn number_to_json(num: &YamlNumber) -> Result<JsonNumber, Error> {
    if let Some(int) = num.as_i64() {
        return Ok(int.into());
    }
    if let Some(uint) = num.as_u64() {
        return Ok(uint.into());
    }
    num.as_f64()
        .and_then(JsonNumber::from_f64)
        .ok_or_else(|| {
            Error::new(ErrorKind::Encode)
                .with_message(format!("number {num} has no JSON representation"))
                .with_hint("JSON has no NaN or infinity; quote the value to keep it as a string.")
        })
}

fn key_collision_error(name: &str) -> Error {
    Error::new(ErrorKind::Encode)
        .with_message(format!("mapping keys collide as JSON object key {name:?}"))
        .with_hint(
            "Keys like `1` and `'1'` are distinct in YAML but not in JSON; rename one of them.",
        )
}

fn tag_error(tagged: &TaggedValue) -> Error {
    let message = format!("unsupported tag {}", tagged.tag);
    let hint = hint_for_message(&message, "yaml.decode");
    Error::new(ErrorKind::Decode)
        .with_message(message)
        .with_hint(hint)
}

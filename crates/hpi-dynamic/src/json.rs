// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON bridge.
//!
//! Converts parsed JSON into [`AnyValue`] trees and back.
//!
//! | JSON        | AnyValue                                        |
//! |-------------|-------------------------------------------------|
//! | object      | `Speicherbox` holding an [`AnyObject`]          |
//! | array       | `Liste`, element type taken from the last item  |
//! | integer     | `Zahl` (i64)                                    |
//! | float       | `Fließkommazahl` (f64)                          |
//! | true/false  | `Wahrheitswert`                                 |
//! | string      | `Zeichenkette`                                  |
//! | null        | `Nichts`                                        |

use crate::{AnyObject, AnyValue, Payload, Result, RuntimeError, TypeDescriptor, TypeKind};
use serde_json::{Map, Number, Value};

/// Convert a parsed JSON tree.
pub fn from_json(value: &Value) -> AnyValue {
    let converted = match value {
        Value::Null => AnyValue::none(),
        Value::Bool(b) => AnyValue::bool(*b),
        Value::Number(n) => from_number(n),
        Value::String(s) => AnyValue::string(s.as_str()),
        Value::Array(items) => AnyValue::list_inferred(items.iter().map(from_json).collect()),
        Value::Object(fields) => AnyValue::object(
            fields
                .iter()
                .map(|(key, field)| (key.as_str(), from_json(field)))
                .collect(),
        ),
    };
    log::trace!("[json] converted {} -> {}", value, converted.type_descriptor());
    converted
}

fn from_number(n: &Number) -> AnyValue {
    if let Some(i) = n.as_i64() {
        return AnyValue::int(i);
    }
    // Floats and unsigned integers beyond i64::MAX.
    AnyValue::float(n.as_f64().unwrap_or(f64::NAN))
}

/// Parse JSON text into an [`AnyValue`].
///
/// Malformed input yields [`RuntimeError::JsonParse`] carrying the parser's
/// message.
pub fn parse_to_any(text: &str) -> Result<AnyValue> {
    let parsed: Value = serde_json::from_str(text).map_err(|err| {
        log::debug!("[json] rejected input of {} bytes: {}", text.len(), err);
        RuntimeError::JsonParse(err.to_string())
    })?;
    Ok(from_json(&parsed))
}

/// Serialize `value` as compact JSON text, directed by `type_desc`.
///
/// - An `Objekt` descriptor emits exactly its declared fields, each under its
///   declared type; a field missing from the record is an error.
/// - A `Speicherbox` emits every stored field under the field's own type.
/// - List elements are emitted under their own types, since a list's element
///   type only reflects its last item.
/// - A `Zahl` payload is accepted where a `Fließkommazahl` is expected.
pub fn marshal(type_desc: &TypeDescriptor, value: &AnyValue) -> Result<String> {
    let json = to_json(type_desc, value)?;
    serde_json::to_string(&json).map_err(|err| RuntimeError::Marshal(err.to_string()))
}

fn to_json(type_desc: &TypeDescriptor, value: &AnyValue) -> Result<Value> {
    let json = match (type_desc.kind(), value.payload()) {
        (TypeKind::None, Payload::None) => Value::Null,
        (TypeKind::Int, Payload::Int(i)) => Value::from(*i),
        (TypeKind::Float, Payload::Float(f)) => float_to_json(*f)?,
        (TypeKind::Float, Payload::Int(i)) => float_to_json(*i as f64)?,
        (TypeKind::Bool, Payload::Bool(b)) => Value::Bool(*b),
        (TypeKind::String, Payload::String(s)) => Value::String(s.clone()),
        (TypeKind::Char, Payload::Char(c)) => Value::String(char::from(*c).to_string()),
        (TypeKind::List, Payload::List(items)) => Value::Array(
            items
                .iter()
                .map(|item| to_json(item.type_descriptor(), item))
                .collect::<Result<_>>()?,
        ),
        (TypeKind::AnyObjectBox, Payload::Object(obj)) => {
            let mut map = Map::new();
            for (key, field) in obj.iter() {
                map.insert(key.to_string(), to_json(field.type_descriptor(), field)?);
            }
            Value::Object(map)
        }
        (TypeKind::Object, Payload::Object(obj)) => declared_fields_to_json(type_desc, obj)?,
        _ => {
            return Err(RuntimeError::Marshal(format!(
                "value of type `{}` cannot be written as `{}`",
                value.type_descriptor(),
                type_desc
            )))
        }
    };
    Ok(json)
}

fn declared_fields_to_json(type_desc: &TypeDescriptor, obj: &AnyObject) -> Result<Value> {
    let mut map = Map::new();
    for (name, field_type) in type_desc.obj_fields().into_iter().flatten() {
        let field = obj.get(name).ok_or_else(|| {
            RuntimeError::Marshal(format!("missing field `{}` of type `{}`", name, type_desc))
        })?;
        map.insert(name.clone(), to_json(field_type, field)?);
    }
    Ok(Value::Object(map))
}

fn float_to_json(f: f64) -> Result<Value> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| RuntimeError::Marshal(format!("non-finite number `{}`", f)))
}

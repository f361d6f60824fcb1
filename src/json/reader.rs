//! Typed accessors used when reading JSON objects into builders.
//!
//! Each accessor reports a wrong JSON type with the key it was read from;
//! callers prefix the path as the error travels outwards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, trace};

use super::error::{JsonError, JsonResult};
use super::traits::ReadJson;
use crate::builders::{ListBuilder, ObjectBuilder};
use crate::types::ListKind;

/// Non-null members of a JSON object.
///
/// `null` members are treated as absent, so they never mark a field as set.
pub(crate) fn entries<'a>(
    value: &'a Value,
    type_name: &'static str,
) -> JsonResult<impl Iterator<Item = (&'a str, &'a Value)>> {
    let object = value
        .as_object()
        .ok_or_else(|| JsonError::invalid_type("", "object"))?;
    Ok(object.iter().filter_map(move |(key, value)| {
        if value.is_null() {
            trace!(object = type_name, field = key.as_str(), "treating null field as absent");
            None
        } else {
            Some((key.as_str(), value))
        }
    }))
}

/// Log a member that does not correspond to any field of the object.
pub(crate) fn skip(type_name: &'static str, key: &str) {
    debug!(object = type_name, field = key, "skipping unknown field");
}

/// Whether a `kind` member marks the object as a link.
pub(crate) fn is_link(value: &Value, link_kind: &str) -> JsonResult<bool> {
    Ok(string("kind", value)? == link_kind)
}

pub(crate) fn string(key: &str, value: &Value) -> JsonResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| JsonError::invalid_type(key, "string"))
}

pub(crate) fn boolean(key: &str, value: &Value) -> JsonResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| JsonError::invalid_type(key, "boolean"))
}

pub(crate) fn integer(key: &str, value: &Value) -> JsonResult<i32> {
    value
        .as_i64()
        .and_then(|number| i32::try_from(number).ok())
        .ok_or_else(|| JsonError::invalid_type(key, "32-bit integer"))
}

pub(crate) fn float(key: &str, value: &Value) -> JsonResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| JsonError::invalid_type(key, "number"))
}

/// An RFC 3339 timestamp, converted to UTC.
pub(crate) fn timestamp(key: &str, value: &Value) -> JsonResult<DateTime<Utc>> {
    let text = value
        .as_str()
        .ok_or_else(|| JsonError::invalid_type(key, "RFC 3339 timestamp"))?;
    DateTime::parse_from_rfc3339(text)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|err| JsonError::InvalidValue {
            path: key.to_string(),
            reason: format!("'{}' is not an RFC 3339 timestamp: {}", text, err),
        })
}

pub(crate) fn strings(key: &str, value: &Value) -> JsonResult<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| JsonError::invalid_type(key, "array of strings"))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| string(&format!("{}[{}]", key, index), item))
        .collect()
}

pub(crate) fn string_map(key: &str, value: &Value) -> JsonResult<BTreeMap<String, String>> {
    let object = value
        .as_object()
        .ok_or_else(|| JsonError::invalid_type(key, "object of strings"))?;
    object
        .iter()
        .map(|(name, item)| Ok((name.clone(), string(&format!("{}.{}", key, name), item)?)))
        .collect()
}

/// A nested object, read into its builder.
pub(crate) fn object<B: ReadJson>(key: &str, value: &Value) -> JsonResult<B> {
    B::read_json(value).map_err(|err| err.within(key))
}

/// An array of nested objects, each read into its builder.
pub(crate) fn objects<B: ReadJson>(key: &str, value: &Value) -> JsonResult<Vec<B>> {
    let items = value
        .as_array()
        .ok_or_else(|| JsonError::invalid_type(key, "array of objects"))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            B::read_json(item).map_err(|err| err.within(&format!("[{}]", index)).within(key))
        })
        .collect()
}

/// A collection of objects, either as a plain array or as a list object
/// carrying `kind`, `href` and `items`.
pub(crate) fn list<B>(key: &str, value: &Value) -> JsonResult<ListBuilder<B>>
where
    B: ReadJson + ObjectBuilder,
    B::Object: ListKind,
{
    if value.is_array() {
        return Ok(ListBuilder::new().items(objects::<B>(key, value)?));
    }
    if !value.is_object() {
        return Err(JsonError::invalid_type(key, "array or list object"));
    }
    list_object::<B>(value).map_err(|err| err.within(key))
}

fn list_object<B>(value: &Value) -> JsonResult<ListBuilder<B>>
where
    B: ReadJson + ObjectBuilder,
    B::Object: ListKind,
{
    let type_name = <B::Object as ListKind>::LIST_KIND;
    let mut list = ListBuilder::new();
    for (key, value) in entries(value, type_name)? {
        list = match key {
            "kind" => list.link(string(key, value)? == <B::Object as ListKind>::LIST_LINK_KIND),
            "href" => list.href(string(key, value)?),
            "items" => list.items(objects::<B>(key, value)?),
            _ => {
                skip(type_name, key);
                list
            }
        };
    }
    Ok(list)
}

//! Response-shape normalization
//!
//! The backend returns lists as a bare array, as `{ data: [...] }` or under a
//! resource key (`{ success, categories: [...] }`), and single entities either
//! bare or wrapped the same way. Callers name the resource key they expect and
//! always get `Vec<T>`, `T` or [`Page<T>`] back.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::listing::Page;

/// Generic wrapper keys tried after the resource key
const WRAPPER_KEYS: [&str; 3] = ["data", "items", "results"];

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("expected a list (bare or under '{key}'), got {found}")]
    MissingList { key: String, found: &'static str },

    #[error("expected an object (bare or under '{key}'), got {found}")]
    MissingEntity { key: String, found: &'static str },

    #[error("{0}")]
    Rejected(String),

    #[error("payload does not match the expected record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Normalize a list payload.
pub fn list_from_value<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, EnvelopeError> {
    check_rejected(&value)?;
    let items = find_list(value, key, true)?;
    Ok(serde_json::from_value(Value::Array(items))?)
}

/// Normalize a single-entity payload.
pub fn entity_from_value<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, EnvelopeError> {
    check_rejected(&value)?;
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(inner)) = map.get(key) {
                return Ok(serde_json::from_value(Value::Object(inner.clone()))?);
            }
            for wrapper in WRAPPER_KEYS {
                if let Some(Value::Object(inner)) = map.get(wrapper) {
                    // `{ data: { order: {...} } }`
                    if let Some(Value::Object(nested)) = inner.get(key) {
                        return Ok(serde_json::from_value(Value::Object(nested.clone()))?);
                    }
                    return Ok(serde_json::from_value(Value::Object(inner.clone()))?);
                }
            }
            Ok(serde_json::from_value(Value::Object(strip_status(map)))?)
        }
        other => Err(EnvelopeError::MissingEntity {
            key: key.to_string(),
            found: kind_of(&other),
        }),
    }
}

/// Normalize a paginated list payload.
///
/// Pagination metadata is read from a `pagination` object (`page`, `limit`,
/// `total`, `totalPages`/`pages`) or from top-level `total`/`page`; missing
/// fields fall back to the request and the number of items received.
pub fn page_from_value<T: DeserializeOwned>(
    value: Value,
    key: &str,
    page: u32,
    per_page: u32,
) -> Result<Page<T>, EnvelopeError> {
    check_rejected(&value)?;
    let meta = value
        .get("pagination")
        .and_then(Value::as_object)
        .cloned()
        .or_else(|| value.as_object().cloned())
        .unwrap_or_default();

    let items: Vec<T> = serde_json::from_value(Value::Array(find_list(value, key, true)?))?;

    let page = read_u64(&meta, &["page", "currentPage"]).map_or(page, |p| p as u32);
    let per_page = read_u64(&meta, &["limit", "perPage"]).map_or(per_page, |l| l as u32);
    let total = read_u64(&meta, &["total", "totalCount", "count"]).unwrap_or(items.len() as u64);
    let mut result = Page::new(items, page, per_page, total);
    if let Some(pages) = read_u64(&meta, &["totalPages", "pages"]) {
        result.total_pages = pages as u32;
    }
    Ok(result)
}

fn find_list(value: Value, key: &str, descend: bool) -> Result<Vec<Value>, EnvelopeError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove(key) {
                return Ok(items);
            }
            for wrapper in WRAPPER_KEYS {
                match map.remove(wrapper) {
                    Some(Value::Array(items)) => return Ok(items),
                    // `{ data: { categories: [...] } }`
                    Some(inner @ Value::Object(_)) if descend => return find_list(inner, key, false),
                    _ => {}
                }
            }
            Err(EnvelopeError::MissingList {
                key: key.to_string(),
                found: "object",
            })
        }
        other => Err(EnvelopeError::MissingList {
            key: key.to_string(),
            found: kind_of(&other),
        }),
    }
}

/// `{ success: false, message }` with a 2xx status is still a rejection.
fn check_rejected(value: &Value) -> Result<(), EnvelopeError> {
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request was not successful");
        return Err(EnvelopeError::Rejected(message.to_string()));
    }
    Ok(())
}

/// Drop envelope status fields so a bare entity with `success`/`message`
/// siblings still deserializes into a record that has no such fields.
fn strip_status(mut map: Map<String, Value>) -> Map<String, Value> {
    if map.get("success").is_some_and(Value::is_boolean) {
        map.remove("success");
    }
    map
}

fn read_u64(map: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| map.get(*k).and_then(Value::as_u64))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

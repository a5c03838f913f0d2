//! Record normalization - coerce loosely-shaped model output into
//! all-string records.
//!
//! Model responses drift: `synonyms` arrives as an array one day and a
//! semicolon-joined string the next, fields come back null or nested.
//! Normalization runs in two passes. [`normalize_synonyms`] canonicalizes
//! the multi-valued field first; [`normalize_fields`] then flattens
//! everything else. The order is load-bearing: the generic pass joins
//! arrays without deduplicating or capping, so the synonym rules must
//! already have been applied.

use serde_json::Value;

use crate::types::record::{Record, REQUIRED_FIELDS};

/// Most synonyms kept per record.
pub const MAX_SYNONYMS: usize = 5;

/// Canonicalize the `synonyms` field into a comma-and-space-joined
/// string of at most [`MAX_SYNONYMS`] deduplicated, order-preserving
/// tokens.
///
/// Reads `synonyms` with a fallback to a stray `synonym` key. Absent,
/// null, or empty values canonicalize to an empty string. Non-object
/// input passes through unchanged.
pub fn normalize_synonyms(value: Value) -> Value {
    let mut map = match value {
        Value::Object(map) => map,
        other => return other,
    };

    let raw = ["synonyms", "synonym"]
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|&v| !is_empty_value(v))
        .cloned();

    let tokens = match raw {
        None => Vec::new(),
        Some(Value::Array(items)) => flatten_array(&items),
        Some(Value::String(text)) => split_tokens(&text),
        Some(other) => vec![stringify(&other)],
    };

    let mut kept: Vec<String> = Vec::new();
    for token in tokens {
        let cleaned = token
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
        if cleaned.is_empty() || kept.contains(&cleaned) {
            continue;
        }
        kept.push(cleaned);
        if kept.len() == MAX_SYNONYMS {
            break;
        }
    }

    map.insert("synonyms".to_string(), Value::String(kept.join(", ")));
    Value::Object(map)
}

/// Coerce every top-level field into a string: null becomes empty,
/// arrays join their stringified elements with `", "`, and anything
/// else takes its compact string form. Non-object input passes through
/// unchanged.
pub fn normalize_fields(value: Value) -> Value {
    let map = match value {
        Value::Object(map) => map,
        other => return other,
    };

    let normalized = map
        .into_iter()
        .map(|(key, v)| {
            let text = match v {
                Value::Null => String::new(),
                Value::Array(items) => items
                    .iter()
                    .map(stringify)
                    .collect::<Vec<_>>()
                    .join(", "),
                other => stringify(&other),
            };
            (key, Value::String(text))
        })
        .collect();

    Value::Object(normalized)
}

/// Full normalization for one parsed response: synonyms first, then the
/// generic coercion, then the conventional-field guarantee required by
/// the rendering side. Returns `None` when the value is not an object.
pub fn normalize_record(value: Value) -> Option<Record> {
    let Value::Object(map) = normalize_fields(normalize_synonyms(value)) else {
        return None;
    };

    let mut record: Record = map
        .into_iter()
        .map(|(key, v)| match v {
            Value::String(text) => (key, text),
            other => (key, other.to_string()),
        })
        .collect();

    for field in REQUIRED_FIELDS {
        if !record.contains_key(field) {
            record.insert(field.to_string(), String::new());
        }
    }

    Some(record)
}

/// Compact string form of a JSON value: strings keep their content,
/// everything else renders as JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Split a free-text synonym value on commas, semicolons, and newlines.
fn split_tokens(text: &str) -> Vec<String> {
    text.replace(';', ",")
        .replace('\n', ",")
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flatten an array-valued synonym field: string elements may themselves
/// hold comma- or semicolon-separated lists, other elements take their
/// compact JSON form.
fn flatten_array(items: &[Value]) -> Vec<String> {
    let mut tokens = Vec::new();
    for item in items {
        match item {
            Value::String(text) => tokens.extend(
                text.replace(';', ",")
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string),
            ),
            other => tokens.push(other.to_string()),
        }
    }
    tokens
}

/// Values the synonym lookup treats as absent.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

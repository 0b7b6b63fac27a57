//! Key-casing translation applied at the wire boundary
//!
//! The remote API speaks snake_case; this library exposes camelCase records.
//! Outbound bodies and query parameters are first canonicalized through a
//! `serde_json::to_value` pass (which turns dates and other custom types
//! into plain JSON) and then have every mapping key rewritten to
//! snake_case. Inbound response values are rewritten to camelCase directly
//! on the already-decoded JSON, without a canonicalizing pass.
//!
//! The transforms are intentionally minimal, matching the wire protocol:
//! consecutive underscores, underscores not followed by a lowercase letter,
//! and keys with leading uppercase letters are not treated specially and do
//! not round-trip.

use serde::Serialize;
use serde_json::Value;

/// Rewrite a camelCase string to snake_case.
///
/// Every ASCII uppercase letter is replaced by an underscore followed by
/// its lowercase form.
#[must_use]
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrite a snake_case string to camelCase.
///
/// Every underscore followed by an ASCII lowercase letter is dropped and
/// the letter uppercased. Other underscores pass through unchanged.
#[must_use]
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            match chars.peek() {
                Some(next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push('_'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Deep-map every object key in a JSON value with `f`.
///
/// Arrays are mapped element-wise; scalars pass through unchanged.
fn deep_map_keys<F>(value: Value, f: F) -> Value
where
    F: Fn(&str) -> String + Copy,
{
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (f(&key), deep_map_keys(inner, f)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| deep_map_keys(item, f)).collect())
        }
        scalar => scalar,
    }
}

/// Rewrite every mapping key in `value` to snake_case, recursively.
#[must_use]
pub fn to_snake_case_keys(value: Value) -> Value {
    deep_map_keys(value, |key| snake_case(key))
}

/// Rewrite every mapping key in `value` to camelCase, recursively.
#[must_use]
pub fn to_camel_case_keys(value: Value) -> Value {
    deep_map_keys(value, |key| camel_case(key))
}

/// Serialize `body` to JSON and rewrite its keys to snake_case.
///
/// The serialize pass canonicalizes values before key rewriting, so custom
/// types end up as plain JSON scalars on the wire.
pub fn serialize_snake_case<B>(body: &B) -> Result<Value, serde_json::Error>
where
    B: Serialize + ?Sized,
{
    Ok(to_snake_case_keys(serde_json::to_value(body)?))
}

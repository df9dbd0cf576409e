//! Parameter-bag lookups and Go literal rendering.
//!
//! Values are interpolated as-is: strings become quoted Go string literals,
//! numbers stay bare, arrays become `[]string{...}` literals. No key is ever
//! required and no type is ever checked.

use serde_json::{Map, Value};

/// Fetch a parameter, treating an explicit JSON `null` as absent.
pub(crate) fn lookup<'a>(params: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match params.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Render a JSON value as a Go literal.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => go_string(s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(render).collect();
            format!("[]string{{{}}}", inner.join(", "))
        }
        // Objects have no Go literal form here; embed their JSON text.
        Value::Object(_) => go_string(&value.to_string()),
    }
}

/// Quote and escape a Go string literal.
pub(crate) fn go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// String-typed slot: the default is quoted, an override renders as-is.
pub(crate) fn quoted_or(params: &Map<String, Value>, key: &str, default: &str) -> String {
    lookup(params, key).map(render).unwrap_or_else(|| go_string(default))
}

/// Number-typed slot: the default literal is emitted verbatim.
pub(crate) fn number_or(params: &Map<String, Value>, key: &str, default: &str) -> String {
    lookup(params, key).map(render).unwrap_or_else(|| default.to_string())
}

/// Tag-list slot: defaults to a single-element example list; a scalar
/// override still renders as a one-element list.
pub(crate) fn string_list_or(params: &Map<String, Value>, key: &str, default_item: &str) -> String {
    match lookup(params, key) {
        Some(value @ Value::Array(_)) => render(value),
        Some(value) => format!("[]string{{{}}}", render(value)),
        None => format!("[]string{{{}}}", go_string(default_item)),
    }
}

/// Slot that is omitted from the output entirely when absent.
pub(crate) fn optional(params: &Map<String, Value>, key: &str) -> Option<String> {
    lookup(params, key).map(render)
}

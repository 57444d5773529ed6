//! Defensive field access over parsed JSON trees
//!
//! The report schemas this tool reads belong to external scanners, so any
//! key can be absent or carry an unexpected type. Every lookup here
//! substitutes a caller-supplied default instead of raising; only malformed
//! top-level documents are errors, and those are caught at load time.

use serde_json::Value;

/// Descend a nested mapping along `path`.
///
/// Returns `None` as soon as a key is missing or the node at that point is
/// not an object. Never panics.
pub fn pluck<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Borrow the value at `path`, or a shared null when absent, so callers can
/// keep chaining lookups without an `Option` dance.
pub fn pluck_or_null<'a>(value: &'a Value, path: &[&str]) -> &'a Value {
    static NULL: Value = Value::Null;
    pluck(value, path).unwrap_or(&NULL)
}

/// String at `path`, or `default` when absent or not a string.
pub fn str_at<'a>(value: &'a Value, path: &[&str], default: &'a str) -> &'a str {
    pluck(value, path).and_then(Value::as_str).unwrap_or(default)
}

/// Float at `path`. Numeric strings parse too, since XML-derived trees carry
/// numbers as text.
pub fn f64_at(value: &Value, path: &[&str], default: f64) -> f64 {
    match pluck(value, path) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Integer at `path`, tolerating floats and numeric strings.
pub fn i64_at(value: &Value, path: &[&str], default: i64) -> i64 {
    match pluck(value, path) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Boolean at `path`, or `default`.
pub fn bool_at(value: &Value, path: &[&str], default: bool) -> bool {
    pluck(value, path).and_then(Value::as_bool).unwrap_or(default)
}

/// Array at `path`, or an empty slice when absent or not an array.
pub fn arr_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    pluck(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Render a scalar the way it should appear in Markdown: strings without
/// surrounding quotes, everything else through its JSON form.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// [`display`] of the value at `path`, with `default` for absent or null.
pub fn display_at(value: &Value, path: &[&str], default: &str) -> String {
    match pluck(value, path) {
        Some(Value::Null) | None => default.to_string(),
        Some(found) => display(found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pluck_descends_nested_maps() {
        let data = json!({"tool": {"driver": {"name": "CodeQL"}}});
        let found = pluck(&data, &["tool", "driver", "name"]);
        assert_eq!(found.and_then(Value::as_str), Some("CodeQL"));
    }

    #[test]
    fn pluck_returns_none_on_missing_key() {
        let data = json!({"tool": {}});
        assert!(pluck(&data, &["tool", "driver", "name"]).is_none());
    }

    #[test]
    fn pluck_returns_none_on_non_map_intermediate() {
        let data = json!({"tool": "not a map"});
        assert!(pluck(&data, &["tool", "driver"]).is_none());
    }

    #[test]
    fn str_at_substitutes_default() {
        let data = json!({"message": {"text": "hi"}});
        assert_eq!(str_at(&data, &["message", "text"], "N/A"), "hi");
        assert_eq!(str_at(&data, &["message", "markdown"], "N/A"), "N/A");
    }

    #[test]
    fn numeric_helpers_accept_strings() {
        let data = json!({"time": "1.5", "tests": "10"});
        assert_eq!(f64_at(&data, &["time"], 0.0), 1.5);
        assert_eq!(i64_at(&data, &["tests"], 0), 10);
    }

    #[test]
    fn arr_at_defaults_to_empty() {
        let data = json!({"runs": "oops"});
        assert!(arr_at(&data, &["runs"]).is_empty());
        assert!(arr_at(&data, &["missing"]).is_empty());
    }

    #[test]
    fn display_at_formats_scalars() {
        let data = json!({"count": 3, "ok": true, "name": "x", "gone": null});
        assert_eq!(display_at(&data, &["count"], "N/A"), "3");
        assert_eq!(display_at(&data, &["ok"], "N/A"), "true");
        assert_eq!(display_at(&data, &["name"], "N/A"), "x");
        assert_eq!(display_at(&data, &["gone"], "N/A"), "N/A");
        assert_eq!(display_at(&data, &["absent"], "N/A"), "N/A");
    }
}

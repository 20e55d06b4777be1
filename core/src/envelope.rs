//! Response-body classification.
//!
//! # Design
//! The provider convention being decoded here wraps list results as
//! `{count: N, value: [...]}`, and signs some failures (auth redirects,
//! proxy interception) as HTML pages served with a 200. Both are runtime
//! content sniffs, and the order is load-bearing: the envelope check runs
//! first on the whole decoded response, the HTML check afterwards on each
//! item — swapping them would misclassify an envelope whose `value` holds
//! HTML-looking strings.

use serde_json::Value;

/// Decode a response body into a structured value.
///
/// A JSON body parses normally; anything else (an HTML error page, plain
/// text) becomes a single text value so the per-item checks still apply.
/// An empty body decodes to nothing.
pub fn decode_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(body.to_string())),
    }
}

/// Unwrap the provider's count/value list envelope, if present.
///
/// An object carrying both a truthy `count` and a truthy `value` is
/// replaced by its `value`; everything else passes through untouched,
/// including `{count: 0, value: []}` empty envelopes.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if map.get("count").is_some_and(is_truthy)
                && map.get("value").is_some_and(is_truthy) =>
        {
            map.remove("value").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Truthiness of a decoded JSON value, as the envelope guard sees it.
///
/// Null, false, zero, the empty string, and the empty array are falsy;
/// objects and all other values are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Whether a response item looks like an HTML error page.
///
/// Deliberately a bare substring match on `<html`, case-insensitive: a
/// JSON string value that happens to contain that substring is classified
/// as an error too. Only text items can match.
pub fn looks_like_html(item: &Value) -> bool {
    item.as_str()
        .is_some_and(|s| s.to_ascii_lowercase().contains("<html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_body_parses_json() {
        let decoded = decode_body(r#"{"id": 7}"#).unwrap();
        assert_eq!(decoded, json!({"id": 7}));
    }

    #[test]
    fn decode_body_falls_back_to_text() {
        let decoded = decode_body("<html><body>Sign in</body></html>").unwrap();
        assert_eq!(decoded, json!("<html><body>Sign in</body></html>"));
    }

    #[test]
    fn decode_body_empty_yields_nothing() {
        assert!(decode_body("").is_none());
        assert!(decode_body("  \n").is_none());
    }

    #[test]
    fn unwrap_envelope_substitutes_value() {
        let wrapped = json!({"count": 3, "value": ["a", "b", "c"]});
        assert_eq!(unwrap_envelope(wrapped), json!(["a", "b", "c"]));
    }

    #[test]
    fn unwrap_envelope_leaves_plain_objects_alone() {
        let plain = json!({"id": 1, "name": "build"});
        assert_eq!(unwrap_envelope(plain.clone()), plain);
    }

    #[test]
    fn unwrap_envelope_ignores_empty_envelope() {
        // count of 0 is falsy, so the wrapper passes through unchanged.
        let empty = json!({"count": 0, "value": []});
        assert_eq!(unwrap_envelope(empty.clone()), empty);
    }

    #[test]
    fn unwrap_envelope_requires_both_fields() {
        let count_only = json!({"count": 2});
        assert_eq!(unwrap_envelope(count_only.clone()), count_only);
        let value_only = json!({"value": [1, 2]});
        assert_eq!(unwrap_envelope(value_only.clone()), value_only);
    }

    #[test]
    fn truthiness_matches_envelope_guard() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn html_sniff_is_case_insensitive() {
        assert!(looks_like_html(&json!("<html><body>nope</body>")));
        assert!(looks_like_html(&json!("<HTML lang=\"en\">")));
        assert!(looks_like_html(&json!("prefix <Html> suffix")));
    }

    #[test]
    fn html_sniff_only_matches_text() {
        assert!(!looks_like_html(&json!({"page": "<html>"})));
        assert!(!looks_like_html(&json!(["<html>"])));
        assert!(!looks_like_html(&json!("plain text")));
    }
}

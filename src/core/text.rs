// Best-effort string helpers: failures fall back to the input, never to an error.
use crate::core::is;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Removes a leading run of `'0'` characters.
pub fn strip_leading_zeros(text: &str) -> &str {
    text.trim_start_matches('0')
}

/// `strip_leading_zeros` over a dynamic value; non-strings pass through.
pub fn strip_leading_zeros_value(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(strip_leading_zeros(&text).to_string()),
        other => other,
    }
}

/// Removes a leading run of `pattern` (literal, case-insensitive), then trims
/// surrounding whitespace.
pub fn strip_leading_char(pattern: &str, text: &str) -> String {
    match leading_run(pattern) {
        Ok(Some(matcher)) => matcher.replace(text, "").trim().to_string(),
        Ok(None) => text.trim().to_string(),
        Err(err) => {
            tracing::debug!(%err, "leading-run matcher unavailable; text left as is");
            text.to_string()
        }
    }
}

/// `strip_leading_char` over dynamic values; `text` is returned unchanged
/// unless both arguments are strings.
pub fn strip_leading_char_value(pattern: &Value, text: Value) -> Value {
    if !is::string(pattern) || !is::string(&text) {
        return text;
    }
    if let (Some(pattern), Some(body)) = (pattern.as_str(), text.as_str()) {
        return Value::String(strip_leading_char(pattern, body));
    }
    text
}

/// True when any Latin letter occurs in `text`.
pub fn has_alphabet(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

fn leading_run(pattern: &str) -> Result<Option<Regex>, regex::Error> {
    if pattern.is_empty() {
        return Ok(None);
    }
    RegexBuilder::new(&format!("^(?:{})+", regex::escape(pattern)))
        .case_insensitive(true)
        .build()
        .map(Some)
}

//! Purpose: Typed error model shared by every helper in the crate.
//! Exports: `Error`, `ErrorKind`, `to_status`, `normalize_error`.
//! Role: Uniform failure value for deferred results and phone parsing.
//! Invariants: `fields` keeps every own field of the originating object.
//! Invariants: `status()` prefers an explicit `status` field over the kind default.
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    Relayed,
    Generic,
    InvalidPhone,
    Usage,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    fields: Map<String, Value>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            fields: Map::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn status(&self) -> u16 {
        self.fields
            .get("status")
            .and_then(Value::as_u64)
            .filter(|status| (100..=599).contains(status))
            .map(|status| status as u16)
            .unwrap_or_else(|| to_status(self.kind))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Shallow-merges `fields` over the current ones; later keys win.
    pub fn with_fields(mut self, fields: &Map<String, Value>) -> Self {
        for (name, value) in fields {
            self.fields.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Builds an error from an object's fields.
    ///
    /// An own `message` field always wins, even when empty; otherwise a
    /// non-empty `msg` is used.
    pub(crate) fn from_fields(kind: ErrorKind, fields: &Map<String, Value>) -> Self {
        let message = match fields.get("message") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
            None => msg_field(fields).unwrap_or_default().to_string(),
        };
        Self::new(kind).with_message(message).with_fields(fields)
    }

    /// JSON view of the error; an own `message` field is kept as given.
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        if let Some(message) = &self.message {
            object
                .entry("message")
                .or_insert_with(|| Value::from(message.as_str()));
        }
        Value::Object(object)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            write!(f, ": {message}")?;
        }
        write!(f, " (status: {})", self.status())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_status(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::NotFound => 404,
        ErrorKind::AlreadyExists => 409,
        ErrorKind::Relayed => 500,
        ErrorKind::Generic => 500,
        ErrorKind::InvalidPhone => 400,
        ErrorKind::Usage => 400,
    }
}

/// Shapes any error-like value into an `Error`.
///
/// Non-objects are treated as an empty object, so the result always exists.
pub fn normalize_error(value: &Value) -> Error {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);
    Error::from_fields(ErrorKind::Generic, fields)
}

fn msg_field(fields: &Map<String, Value>) -> Option<&str> {
    fields
        .get("msg")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, normalize_error, to_status};
    use serde_json::json;

    #[test]
    fn status_mapping_is_stable() {
        let cases = [
            (ErrorKind::NotFound, 404),
            (ErrorKind::AlreadyExists, 409),
            (ErrorKind::Relayed, 500),
            (ErrorKind::Generic, 500),
            (ErrorKind::InvalidPhone, 400),
            (ErrorKind::Usage, 400),
        ];

        for (kind, status) in cases {
            assert_eq!(to_status(kind), status);
        }
    }

    #[test]
    fn normalize_prefers_message_then_msg() {
        let err = normalize_error(&json!({"msg": "x", "status": 400}));
        assert_eq!(err.message(), Some("x"));
        assert_eq!(err.status(), 400);
        assert_eq!(err.kind(), ErrorKind::Generic);

        let err = normalize_error(&json!({"message": "primary", "msg": "secondary"}));
        assert_eq!(err.message(), Some("primary"));
    }

    #[test]
    fn own_message_field_is_applied_last() {
        let err = normalize_error(&json!({"message": "", "msg": "x"}));
        assert_eq!(err.message(), Some(""));
        assert_eq!(err.to_value()["message"], json!(""));

        let err = normalize_error(&json!({"message": 42, "msg": "x"}));
        assert_eq!(err.message(), Some("42"));
        assert_eq!(err.to_value()["message"], json!(42));

        let err = normalize_error(&json!({"message": null, "msg": "x"}));
        assert_eq!(err.message(), Some(""));
        assert_eq!(err.to_value()["message"], json!(null));
    }

    #[test]
    fn normalize_keeps_every_field() {
        let err = normalize_error(&json!({"msg": "bad", "status": 422, "body": {"id": 7}}));
        assert_eq!(err.field("body"), Some(&json!({"id": 7})));
        assert_eq!(err.field("msg"), Some(&json!("bad")));
        assert_eq!(err.fields().len(), 3);
    }

    #[test]
    fn normalize_coerces_non_objects_to_empty() {
        for value in [json!(null), json!("oops"), json!([1, 2]), json!(5)] {
            let err = normalize_error(&value);
            assert_eq!(err.message(), Some(""));
            assert!(err.fields().is_empty());
            assert_eq!(err.status(), 500);
        }
    }

    #[test]
    fn out_of_range_status_falls_back_to_kind() {
        let err = Error::new(ErrorKind::NotFound).with_field("status", "nope");
        assert_eq!(err.status(), 404);

        let err = Error::new(ErrorKind::NotFound).with_field("status", 7);
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn display_includes_kind_message_and_status() {
        let err = Error::new(ErrorKind::AlreadyExists)
            .with_message("Already Exists")
            .with_field("status", 409);
        assert_eq!(err.to_string(), "AlreadyExists: Already Exists (status: 409)");

        let err = Error::new(ErrorKind::Generic).with_message("");
        assert_eq!(err.to_string(), "Generic (status: 500)");
    }

    #[test]
    fn to_value_merges_message_into_fields() {
        let err = Error::new(ErrorKind::NotFound)
            .with_message("Not Found")
            .with_field("status", 404);
        assert_eq!(err.to_value(), json!({"status": 404, "message": "Not Found"}));
    }
}

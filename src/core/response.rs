//! Purpose: Guard data-access responses by the presence of `rows`.
//! Exports: `Deferred`, `reject_if_response_is_none`, `reject_if_exist`, `simple_error_handler`.
//! Role: Composable steps for async pipelines built on query results.
//! Invariants: Outcomes are decided at call time; returned futures are already settled.
//! Invariants: A missing or null `rows` field is normalized to `[]` on the resolved value.
use crate::core::error::{Error, ErrorKind};
use crate::core::is;
use serde_json::{Map, Value};
use std::future::{Ready, ready};

/// A settled future carrying the outcome of a guard.
pub type Deferred<T> = Ready<Result<T, Error>>;

const NOT_FOUND_MSG: &str = "Not Found";
const ALREADY_EXISTS_MSG: &str = "Already Exists";

/// Fails with `NotFound` when the response has no rows.
///
/// The response is `secondary` when it is supplied and truthy, otherwise
/// `primary`. On failure the error carries `status: 404` and `msg`, with the
/// fields of `primary` merged over them.
pub fn reject_if_response_is_none(primary: Value, secondary: Option<Value>) -> Deferred<Value> {
    let (response, primary_fields) = match secondary {
        Some(secondary) if is::truthy(&secondary) => {
            let fields = primary.as_object().cloned().unwrap_or_default();
            (normalize_rows(secondary), fields)
        }
        _ => {
            let response = normalize_rows(primary);
            let fields = response.as_object().cloned().unwrap_or_default();
            (response, fields)
        }
    };

    if row_count(&response) == 0 {
        tracing::debug!("rejecting: response rows are empty or null");
        let mut fields = Map::new();
        fields.insert("status".to_string(), Value::from(404));
        fields.insert("msg".to_string(), Value::from(NOT_FOUND_MSG));
        fields.extend(primary_fields);
        return ready(Err(Error::from_fields(ErrorKind::NotFound, &fields)));
    }
    ready(Ok(response))
}

/// Fails with `AlreadyExists` when the response has any rows.
pub fn reject_if_exist(response: Value) -> Deferred<Value> {
    let response = normalize_rows(response);
    if row_count(&response) > 0 {
        tracing::debug!(rows = row_count(&response), "rejecting: response rows are not empty");
        let err = Error::new(ErrorKind::AlreadyExists)
            .with_message(ALREADY_EXISTS_MSG)
            .with_field("status", 409)
            .with_field("msg", ALREADY_EXISTS_MSG);
        return ready(Err(err));
    }
    ready(Ok(response))
}

/// Logs an error and relays it when called with a single argument.
///
/// The error is `detail` when supplied and truthy, otherwise `error`. With no
/// `detail` the result fails with the error as `Relayed`; once `detail` is
/// supplied at all the call is a pass-through and resolves to `()`.
pub fn simple_error_handler(error: Value, detail: Option<Value>) -> Deferred<()> {
    let relay = detail.is_none();
    let error = match detail {
        Some(detail) if is::truthy(&detail) => detail,
        _ => error,
    };
    tracing::debug!(error = %describe(&error), "error was handled by simple_error_handler");

    if !relay {
        return ready(Ok(()));
    }
    let err = match error.as_object() {
        Some(fields) => Error::from_fields(ErrorKind::Relayed, fields),
        None => Error::new(ErrorKind::Relayed).with_message(describe(&error)),
    };
    ready(Err(err))
}

/// Best available human text for an error-like value.
pub(crate) fn describe(value: &Value) -> String {
    if let Some(fields) = value.as_object() {
        let picked = ["message", "body", "msg"]
            .iter()
            .filter_map(|name| fields.get(*name))
            .find(|field| is::truthy(field));
        if let Some(field) = picked {
            return text_of(field);
        }
    }
    text_of(value)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn normalize_rows(response: Value) -> Value {
    match response {
        Value::Object(mut fields) => {
            if fields.get("rows").is_none_or(Value::is_null) {
                fields.insert("rows".to_string(), Value::Array(Vec::new()));
            }
            Value::Object(fields)
        }
        other => other,
    }
}

fn row_count(response: &Value) -> usize {
    response
        .get("rows")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

//! Purpose: Facade that owns the injected dependencies of the helpers.
//! Exports: `Utility`, `UtilityOptions`.
//! Role: Single handle application code constructs once and shares.
//! Invariants: Immutable after construction; safe to share across tasks.
//! Invariants: Methods that can log run inside the `utility` span tagged with the configured name.
use crate::core::error::{Error, normalize_error};
use crate::core::phone::{self, DEFAULT_REGION, PhoneFormatter};
use crate::core::response::{self, Deferred};
use crate::core::{collections, text};
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_NAME: &str = "Utility";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UtilityOptions {
    pub name: String,
    pub default_region: String,
}

impl UtilityOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }
}

impl Default for UtilityOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Utility {
    options: UtilityOptions,
    phone: PhoneFormatter,
    span: tracing::Span,
}

impl Utility {
    pub fn new(options: UtilityOptions) -> Result<Self, Error> {
        let phone = PhoneFormatter::new(&options.default_region)?;
        let span = tracing::debug_span!("utility", name = %options.name);
        Ok(Self {
            options,
            phone,
            span,
        })
    }

    pub fn options(&self) -> &UtilityOptions {
        &self.options
    }

    pub fn phone(&self) -> &PhoneFormatter {
        &self.phone
    }

    pub fn reject_if_response_is_none(
        &self,
        primary: Value,
        secondary: Option<Value>,
    ) -> Deferred<Value> {
        let _entered = self.span.enter();
        response::reject_if_response_is_none(primary, secondary)
    }

    pub fn reject_if_exist(&self, response: Value) -> Deferred<Value> {
        let _entered = self.span.enter();
        response::reject_if_exist(response)
    }

    pub fn simple_error_handler(&self, error: Value, detail: Option<Value>) -> Deferred<()> {
        let _entered = self.span.enter();
        response::simple_error_handler(error, detail)
    }

    pub fn strip_leading_zeros(&self, value: Value) -> Value {
        text::strip_leading_zeros_value(value)
    }

    pub fn strip_leading_char(&self, pattern: &Value, value: Value) -> Value {
        let _entered = self.span.enter();
        text::strip_leading_char_value(pattern, value)
    }

    pub fn has_alphabet(&self, value: &str) -> bool {
        text::has_alphabet(value)
    }

    /// Reformats one number; `region` overrides the configured default.
    pub fn reformat_phone_number(
        &self,
        value: Value,
        region: Option<&str>,
    ) -> Result<Value, Error> {
        let _entered = self.span.enter();
        phone::reformat_phone_number(&self.phone, value, region)
    }

    pub fn reformat_phone_numbers(
        &self,
        value: Value,
        region: Option<&str>,
    ) -> Result<Value, Error> {
        let _entered = self.span.enter();
        phone::reformat_phone_numbers(&self.phone, value, region)
    }

    /// Positions of `element` in a JSON list; numbers match by value.
    pub fn find_all_index(&self, list: &[Value], element: &Value) -> Vec<usize> {
        collections::find_all_index_value(list, element)
    }

    pub fn object_values(&self, value: &Value) -> Vec<Value> {
        collections::object_values(value)
    }

    pub fn normalize_error(&self, value: &Value) -> Error {
        normalize_error(value)
    }
}

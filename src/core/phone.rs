//! Purpose: Normalize phone numbers to the E.164 international form.
//! Exports: `PhoneFormatter`, `reformat_phone_number`, `reformat_phone_numbers`, `DEFAULT_REGION`.
//! Role: Explicitly constructed parser handle; callers own and share it.
//! Invariants: Output is `+<country code><national number>` with no separators.
//! Invariants: Parse failures surface as `InvalidPhone`; nothing is silently dropped.
//! Notes: Values that are neither strings nor numbers, and blank strings, pass through unchanged.
use crate::core::error::{Error, ErrorKind};
use phonenumber::{Mode, country};
use serde_json::Value;

pub const DEFAULT_REGION: &str = "NG";

#[derive(Clone, Copy, Debug)]
pub struct PhoneFormatter {
    region: country::Id,
}

impl PhoneFormatter {
    pub fn new(default_region: &str) -> Result<Self, Error> {
        Ok(Self {
            region: parse_region(default_region)?,
        })
    }

    pub fn region(&self) -> country::Id {
        self.region
    }

    /// Parses `number` under `region` (or the default) and renders E.164.
    pub fn format(&self, number: &str, region: Option<&str>) -> Result<String, Error> {
        let region = match region {
            Some(code) => parse_region(code)?,
            None => self.region,
        };
        let trimmed = number.trim();
        let parsed = phonenumber::parse(Some(region), trimmed).map_err(|err| {
            Error::new(ErrorKind::InvalidPhone)
                .with_message(format!("cannot parse phone number {trimmed:?}"))
                .with_field("number", trimmed)
                .with_source(err)
        })?;
        Ok(parsed.format().mode(Mode::E164).to_string())
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self {
            region: country::Id::NG,
        }
    }
}

/// Reformats a single dynamic value; numbers are read as their decimal text.
///
/// Numeric input is formatted too, so `8012345678` under `NG` becomes
/// `"+2348012345678"`. Older callers that relied on numbers passing through
/// untouched must convert them before calling.
pub fn reformat_phone_number(
    formatter: &PhoneFormatter,
    value: Value,
    region: Option<&str>,
) -> Result<Value, Error> {
    let text = match &value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return Ok(value),
    };
    if text.is_empty() {
        return Ok(value);
    }
    formatter.format(&text, region).map(Value::String)
}

/// Reformats every element of an array in place order; the first failure aborts.
pub fn reformat_phone_numbers(
    formatter: &PhoneFormatter,
    value: Value,
    region: Option<&str>,
) -> Result<Value, Error> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| reformat_phone_number(formatter, item, region))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Ok(other),
    }
}

fn parse_region(code: &str) -> Result<country::Id, Error> {
    let normalized = code.trim().to_ascii_uppercase();
    normalized.parse::<country::Id>().map_err(|_| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("unknown region code {code:?}"))
            .with_field("region", code)
    })
}

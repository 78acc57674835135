// Shape predicates over dynamic JSON values.
// All predicates are total; `object` and `array` never both hold.
use serde_json::Value;

pub fn object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// True for numbers with a base-10 integer reading. JSON numbers are always
/// finite, so every `Value::Number` qualifies.
pub fn number(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64() || number.is_u64() || number.as_f64().is_some_and(f64::is_finite)
        }
        _ => false,
    }
}

/// True when `value` is not an object, or is an object without keys.
pub fn empty_object(value: &Value) -> bool {
    value.as_object().is_none_or(|object| object.is_empty())
}

/// Falsy values are `null`, `false`, `0` and `""`.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    fn samples() -> Vec<Value> {
        vec![
            json!(null),
            json!(true),
            json!(0),
            json!(-3.5),
            json!("text"),
            json!([]),
            json!(["names"]),
            json!({}),
            json!({"name": "John Doe"}),
        ]
    }

    #[test]
    fn array_detects_sequences_only() {
        assert!(!super::array(&json!("my name")));
        assert!(super::array(&json!(["names"])));
        assert!(super::array(&json!([])));
        assert!(!super::array(&json!({"0": "names"})));
    }

    #[test]
    fn object_and_array_are_exclusive() {
        for value in samples() {
            assert!(
                !(super::object(&value) && super::array(&value)),
                "both predicates held for {value}"
            );
        }
        assert!(super::object(&json!({})));
        assert!(!super::object(&json!(null)));
    }

    #[test]
    fn string_and_number_match_their_variants() {
        assert!(super::string(&json!("")));
        assert!(!super::string(&json!(12)));
        assert!(super::number(&json!(12)));
        assert!(super::number(&json!(-3.5)));
        assert!(!super::number(&json!("12")));
        assert!(!super::number(&json!(null)));
    }

    #[test]
    fn empty_object_treats_non_objects_as_empty() {
        assert!(super::empty_object(&json!({})));
        assert!(super::empty_object(&json!([1])));
        assert!(super::empty_object(&json!("text")));
        assert!(!super::empty_object(&json!({"status": 404})));
    }

    #[test]
    fn truthy_follows_falsy_set() {
        let falsy = [json!(null), json!(false), json!(0), json!(0.0), json!("")];
        for value in falsy {
            assert!(!super::truthy(&value), "{value} should be falsy");
        }
        let truthy = [json!(true), json!(1), json!("0"), json!([]), json!({})];
        for value in truthy {
            assert!(super::truthy(&value), "{value} should be truthy");
        }
    }
}

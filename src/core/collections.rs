// Sequence and object helpers.
use serde_json::Value;

/// Positions of every element equal to `element`, in ascending order.
pub fn find_all_index<T: PartialEq>(list: &[T], element: &T) -> Vec<usize> {
    positions(list, |item| item == element)
}

/// `find_all_index` for JSON lists under `strict_eq`, so `1` and `1.0` match.
pub fn find_all_index_value(list: &[Value], element: &Value) -> Vec<usize> {
    positions(list, |item| strict_eq(item, element))
}

/// Strict equality for JSON values: numbers compare by numeric value, other
/// values structurally.
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if a == b {
                return true;
            }
            if !(a.is_f64() || b.is_f64()) {
                return false;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| strict_eq(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| strict_eq(a, b)))
        }
        _ => left == right,
    }
}

/// Values of an object in insertion order; non-objects yield nothing.
pub fn object_values(value: &Value) -> Vec<Value> {
    value
        .as_object()
        .map(|object| object.values().cloned().collect())
        .unwrap_or_default()
}

fn positions<T>(list: &[T], mut matches: impl FnMut(&T) -> bool) -> Vec<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, item)| matches(*item))
        .map(|(idx, _)| idx)
        .collect()
}

//! DataValue construction and extraction helpers.

use cozo::{DataValue, Num};

/// Extract a String from a DataValue, returning None if not a string
pub fn extract_string(value: &DataValue) -> Option<String> {
    match value {
        DataValue::Str(s) => Some(s.to_string()),
        _ => None,
    }
}

/// Extract a String from a DataValue, returning the default if not a string
pub fn extract_string_or(value: &DataValue, default: &str) -> String {
    match value {
        DataValue::Str(s) => s.to_string(),
        _ => default.to_string(),
    }
}

/// Extract a nullable string column. `Some(None)` means a stored null.
pub fn extract_opt_string(value: &DataValue) -> Option<Option<String>> {
    match value {
        DataValue::Null => Some(None),
        DataValue::Str(s) => Some(Some(s.to_string())),
        _ => None,
    }
}

/// Extract an i64 from a DataValue, returning None if not a number
pub fn extract_i64(value: &DataValue) -> Option<i64> {
    match value {
        DataValue::Num(Num::Int(i)) => Some(*i),
        DataValue::Num(Num::Float(f)) => Some(*f as i64),
        _ => None,
    }
}

/// Extract a nullable integer column. `Some(None)` means a stored null.
pub fn extract_opt_i64(value: &DataValue) -> Option<Option<i64>> {
    match value {
        DataValue::Null => Some(None),
        other => extract_i64(other).map(Some),
    }
}

/// Extract a bool from a DataValue, returning None if not a bool
pub fn extract_bool(value: &DataValue) -> Option<bool> {
    match value {
        DataValue::Bool(b) => Some(*b),
        _ => None,
    }
}

pub fn str_value(s: &str) -> DataValue {
    DataValue::Str(s.into())
}

pub fn int_value(i: i64) -> DataValue {
    DataValue::Num(Num::Int(i))
}

pub fn bool_value(b: bool) -> DataValue {
    DataValue::Bool(b)
}

pub fn opt_str_value(s: Option<&str>) -> DataValue {
    s.map(str_value).unwrap_or(DataValue::Null)
}

pub fn opt_int_value(i: Option<i64>) -> DataValue {
    i.map(int_value).unwrap_or(DataValue::Null)
}

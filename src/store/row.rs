//! Row encoding helpers shared by the `Record` implementations.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use cozo::DataValue;

use crate::db::{
    bool_value, extract_bool, extract_i64, extract_opt_i64, extract_opt_string, extract_string,
    int_value, opt_int_value, opt_str_value, str_value,
};
use crate::models::values::{
    format_date, format_decimal, format_timestamp, parse_date, parse_decimal, parse_timestamp,
};
use crate::models::Timestamp;

/// Typed access to the cells of a fetched row. Every accessor returns `None`
/// when the cell is missing or has the wrong shape.
pub struct RowReader<'a> {
    row: &'a [DataValue],
}

impl<'a> RowReader<'a> {
    pub fn new(row: &'a [DataValue]) -> Self {
        Self { row }
    }

    pub fn string(&self, idx: usize) -> Option<String> {
        self.row.get(idx).and_then(extract_string)
    }

    pub fn opt_string(&self, idx: usize) -> Option<Option<String>> {
        self.row.get(idx).and_then(extract_opt_string)
    }

    pub fn int(&self, idx: usize) -> Option<i64> {
        self.row.get(idx).and_then(extract_i64)
    }

    pub fn opt_int(&self, idx: usize) -> Option<Option<i64>> {
        self.row.get(idx).and_then(extract_opt_i64)
    }

    pub fn bool(&self, idx: usize) -> Option<bool> {
        self.row.get(idx).and_then(extract_bool)
    }

    pub fn timestamp(&self, idx: usize) -> Option<Timestamp> {
        parse_timestamp(&self.string(idx)?)
    }

    pub fn decimal(&self, idx: usize) -> Option<BigDecimal> {
        parse_decimal(&self.string(idx)?)
    }

    pub fn date(&self, idx: usize) -> Option<NaiveDate> {
        parse_date(&self.string(idx)?)
    }

    pub fn opt_date(&self, idx: usize) -> Option<Option<NaiveDate>> {
        match self.opt_string(idx)? {
            Some(s) => parse_date(&s).map(Some),
            None => Some(None),
        }
    }

    pub fn choice<T: FromStr>(&self, idx: usize) -> Option<T> {
        self.string(idx)?.parse().ok()
    }
}

pub fn text(s: &str) -> DataValue {
    str_value(s)
}

pub fn opt_text(s: Option<&str>) -> DataValue {
    opt_str_value(s)
}

pub fn int(i: i64) -> DataValue {
    int_value(i)
}

pub fn opt_int(i: Option<i64>) -> DataValue {
    opt_int_value(i)
}

pub fn flag(b: bool) -> DataValue {
    bool_value(b)
}

pub fn timestamp(ts: &Timestamp) -> DataValue {
    str_value(&format_timestamp(ts))
}

pub fn decimal(d: &BigDecimal) -> DataValue {
    str_value(&format_decimal(d))
}

pub fn date(d: &NaiveDate) -> DataValue {
    str_value(&format_date(d))
}

pub fn opt_date(d: Option<&NaiveDate>) -> DataValue {
    match d {
        Some(d) => date(d),
        None => DataValue::Null,
    }
}

/// Conversion of a primary key into the stored cell value.
pub trait IntoKey {
    fn into_key(self) -> DataValue;
}

impl IntoKey for &str {
    fn into_key(self) -> DataValue {
        str_value(self)
    }
}

impl IntoKey for &String {
    fn into_key(self) -> DataValue {
        str_value(self)
    }
}

impl IntoKey for String {
    fn into_key(self) -> DataValue {
        str_value(&self)
    }
}

impl IntoKey for i64 {
    fn into_key(self) -> DataValue {
        int_value(self)
    }
}

impl IntoKey for DataValue {
    fn into_key(self) -> DataValue {
        self
    }
}

impl IntoKey for &DataValue {
    fn into_key(self) -> DataValue {
        self.clone()
    }
}

/// Key as shown to users: bare for strings and numbers.
pub fn display_key(key: &DataValue) -> String {
    match key {
        DataValue::Str(s) => s.to_string(),
        other => extract_i64(other)
            .map(|i| i.to_string())
            .unwrap_or_else(|| crate::db::literal(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_reader_typed_access() {
        let row = vec![
            text("Aging"),
            int(3),
            DataValue::Null,
            text("high"),
            text("12.50"),
            text("2024-01-02"),
        ];
        let r = RowReader::new(&row);
        assert_eq!(r.string(0).as_deref(), Some("Aging"));
        assert_eq!(r.int(1), Some(3));
        assert_eq!(r.opt_string(2), Some(None));
        assert_eq!(r.choice::<Severity>(3), Some(Severity::High));
        assert_eq!(r.decimal(4).map(|d| format_decimal(&d)).as_deref(), Some("12.50"));
        assert_eq!(r.opt_date(2), Some(None));
        assert!(r.date(5).is_some());
        assert_eq!(r.string(9), None);
    }

    #[test]
    fn test_reader_rejects_wrong_shape() {
        let row = vec![int(1), text("urgent")];
        let r = RowReader::new(&row);
        assert_eq!(r.string(0), None);
        assert_eq!(r.choice::<Severity>(1), None);
        assert_eq!(r.timestamp(1), None);
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key(&"Biology".into_key()), "Biology");
        assert_eq!(display_key(&7i64.into_key()), "7");
    }
}

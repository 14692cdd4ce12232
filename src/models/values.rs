//! Conversions between model value types and their stored string forms.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

pub type Timestamp = DateTime<Utc>;

/// RFC 3339 with microseconds and a `Z` suffix. Fixed width, so stored
/// timestamps sort chronologically as strings.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Current time truncated to the stored precision.
pub fn now() -> Timestamp {
    let ts = Utc::now();
    parse_timestamp(&format_timestamp(&ts)).unwrap_or(ts)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Canonical two-place form, e.g. `1000.00`.
pub fn format_decimal(value: &BigDecimal) -> String {
    let (digits, _) = value.with_scale(2).as_bigint_and_exponent();
    let digits = digits.to_string();
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    let padded = format!("{:0>3}", magnitude);
    let (whole, cents) = padded.split_at(padded.len() - 2);
    format!("{sign}{whole}.{cents}")
}

pub fn parse_decimal(s: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(s).ok()
}

pub fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

//! Field-level validation for directory records.
//!
//! A `Validator` collects every failing field before reporting, so a single
//! error lists all offending fields of a record.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("valid email regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$").expect("valid url regex"));

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {entity}: {}", summary(.errors))]
pub struct ValidationError {
    pub entity: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(entity: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            entity,
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }

    /// Names of the offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builder that accumulates field errors for one record.
#[derive(Debug)]
pub struct Validator {
    entity: &'static str,
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            errors: Vec::new(),
        }
    }

    fn fail(mut self, field: &'static str, message: String) -> Self {
        self.errors.push(FieldError { field, message });
        self
    }

    /// Fail with `message` unless `ok` holds.
    pub fn check(self, field: &'static str, ok: bool, message: &str) -> Self {
        if ok { self } else { self.fail(field, message.to_string()) }
    }

    pub fn required(self, field: &'static str, value: &str) -> Self {
        self.check(field, !value.trim().is_empty(), "This field is required")
    }

    pub fn max_length(self, field: &'static str, value: &str, max: usize) -> Self {
        let len = value.chars().count();
        if len > max {
            let message = format!("Ensure this value has at most {} characters (it has {})", max, len);
            self.fail(field, message)
        } else {
            self
        }
    }

    /// Required and bounded.
    pub fn text(self, field: &'static str, value: &str, max: usize) -> Self {
        if value.trim().is_empty() {
            return self.required(field, value);
        }
        self.max_length(field, value, max)
    }

    pub fn range(self, field: &'static str, value: i64, min: i64, max: i64) -> Self {
        if value < min || value > max {
            self.fail(field, format!("Ensure this value is between {} and {}", min, max))
        } else {
            self
        }
    }

    pub fn min(self, field: &'static str, value: i64, min: i64) -> Self {
        if value < min {
            self.fail(field, format!("Ensure this value is greater than or equal to {}", min))
        } else {
            self
        }
    }

    /// At most `max_digits` significant digits with at most `places` after
    /// the point. Trailing zeros do not count.
    pub fn decimal(self, field: &'static str, value: &BigDecimal, max_digits: i64, places: i64) -> Self {
        let (digits, scale) = value.normalized().as_bigint_and_exponent();
        let digit_count = digits.magnitude().to_string().len() as i64;
        let (total, decimals) = if scale < 0 {
            (digit_count - scale, 0)
        } else {
            (digit_count.max(scale), scale)
        };
        let whole = total - decimals;

        if decimals > places {
            let message = format!("Ensure that there are no more than {} decimal places", places);
            return self.fail(field, message);
        }
        if whole > max_digits - places {
            let message = format!(
                "Ensure that there are no more than {} digits before the decimal point",
                max_digits - places
            );
            return self.fail(field, message);
        }
        self
    }

    pub fn email(self, field: &'static str, value: &str) -> Self {
        self.check(field, EMAIL_RE.is_match(value), "Enter a valid email address")
    }

    /// Blank is allowed; anything else must be an http(s) URL.
    pub fn url(self, field: &'static str, value: &str) -> Self {
        self.check(field, value.is_empty() || URL_RE.is_match(value), "Enter a valid URL")
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                entity: self.entity,
                errors: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[rstest]
    fn test_collects_all_failures() {
        let err = Validator::new("field")
            .text("name", "", 200)
            .text("domain", &"x".repeat(201), 200)
            .finish()
            .unwrap_err();
        assert_eq!(err.fields(), vec!["name", "domain"]);
        assert!(err.to_string().starts_with("Invalid field: name: This field is required"));
    }

    #[rstest]
    fn test_max_length_counts_chars() {
        assert!(Validator::new("x").max_length("title", "ééé", 3).finish().is_ok());
        assert!(Validator::new("x").max_length("title", "éééé", 3).finish().is_err());
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(5, true)]
    #[case(6, false)]
    fn test_range(#[case] value: i64, #[case] ok: bool) {
        assert_eq!(Validator::new("mentor").range("rating", value, 1, 5).finish().is_ok(), ok);
    }

    #[rstest]
    #[case("1234567890.12", 12, true)]
    #[case("12345678901.00", 12, false)]
    #[case("1.005", 12, false)]
    #[case("1.50", 12, true)]
    #[case("999.99", 5, true)]
    #[case("1000", 5, false)]
    #[case("0", 5, true)]
    fn test_decimal(#[case] value: &str, #[case] max_digits: i64, #[case] ok: bool) {
        let result = Validator::new("problem")
            .decimal("funding_reserves", &dec(value), max_digits, 2)
            .finish();
        assert_eq!(result.is_ok(), ok, "{}", value);
    }

    #[rstest]
    #[case("ada@mit.edu", true)]
    #[case("ada.lovelace@cs.ox.ac.uk", true)]
    #[case("ada@mit", false)]
    #[case("ada mit.edu", false)]
    #[case("", false)]
    fn test_email(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(Validator::new("researcher").email("email", value).finish().is_ok(), ok);
    }

    #[rstest]
    #[case("", true)]
    #[case("https://github.com/ada", true)]
    #[case("http://example.org", true)]
    #[case("github.com/ada", false)]
    #[case("ftp://example.org", false)]
    fn test_url(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(Validator::new("researcher").url("github", value).finish().is_ok(), ok);
    }
}

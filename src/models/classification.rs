//! Fields, subfields, and the problems filed under them.

use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::choices::Severity;
use super::values::{now, zero, Timestamp};

/// A research field, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub domain: String,
    pub area: String,
    pub field_type: String,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl Field {
    pub fn new(name: &str, domain: &str, area: &str, field_type: &str) -> Self {
        let ts = now();
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            area: area.to_string(),
            field_type: field_type.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.domain)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subfield {
    pub name: String,
    /// Parent field name
    pub field: String,
    pub field_type: String,
    pub domain: String,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl Subfield {
    pub fn new(name: &str, field: &str, field_type: &str, domain: &str) -> Self {
        let ts = now();
        Self {
            name: name.to_string(),
            field: field.to_string(),
            field_type: field_type.to_string(),
            domain: domain.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for Subfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (under {})", self.name, self.field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub subfield: String,
    pub description: String,
    pub current_proceedings: String,
    #[serde(default)]
    pub ongoing_work: String,
    #[serde(default)]
    pub done_work: String,
    #[serde(default)]
    pub list_of_researchers_working: String,
    #[serde(default = "zero")]
    pub funding_reserves: BigDecimal,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl Problem {
    pub fn new(name: &str, subfield: &str, description: &str, current_proceedings: &str) -> Self {
        let ts = now();
        Self {
            name: name.to_string(),
            subfield: subfield.to_string(),
            description: description.to_string(),
            current_proceedings: current_proceedings.to_string(),
            ongoing_work: String::new(),
            done_work: String::new(),
            list_of_researchers_working: String::new(),
            funding_reserves: zero(),
            severity: Severity::default(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.severity.as_str().to_uppercase())
    }
}

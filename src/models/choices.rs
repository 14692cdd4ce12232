//! Closed sets of string choices stored in the directory.
//!
//! Each choice type is stored as its snake_case code and parsed back with
//! `FromStr`. Unknown codes fail with a `ChoiceError` naming the allowed values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} '{value}': expected one of {allowed}")]
pub struct ChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub allowed: String,
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $variant:ident => $code:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Stored code, e.g. `under_review`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    other => Err(ChoiceError {
                        kind: $kind,
                        value: other.to_string(),
                        allowed: [$( $code ),+].join(", "),
                    }),
                }
            }
        }
    };
}

choice_enum! {
    /// Problem severity. Default is `Medium`.
    Severity ("severity") {
        Low => "low", "Low Priority";
        Medium => "medium", "Medium Priority";
        High => "high", "High Priority";
        Critical => "critical", "Critical Priority";
    }
}

choice_enum! {
    WorkStatus ("status") {
        Published => "published", "Published";
        UnderReview => "under_review", "Under Review";
        InProgress => "in_progress", "In Progress";
        Draft => "draft", "Draft";
    }
}

choice_enum! {
    QueryType ("query_type") {
        Technical => "technical", "Technical";
        Research => "research", "Research";
        General => "general", "General";
    }
}

choice_enum! {
    ProposalStatus ("proposal_status") {
        Pending => "pending", "Pending";
        Approved => "approved", "Approved";
        Rejected => "rejected", "Rejected";
        UnderReview => "under_review", "Under Review";
    }
}

impl Severity {
    /// Display colour used by the web views.
    pub fn colour(&self) -> &'static str {
        match self {
            Severity::Low => "green",
            Severity::Medium => "yellow",
            Severity::High => "orange",
            Severity::Critical => "red",
        }
    }

    /// Sort rank, most severe first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Medium
    }
}

impl Default for WorkStatus {
    fn default() -> Self {
        WorkStatus::Draft
    }
}

impl Default for QueryType {
    fn default() -> Self {
        QueryType::General
    }
}

impl Default for ProposalStatus {
    fn default() -> Self {
        ProposalStatus::Pending
    }
}

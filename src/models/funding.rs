//! Funding institutions, proposals, and the collaboration join.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::choices::ProposalStatus;
use super::shapes::PostShape;
use super::values::{format_decimal, now, zero, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingInstitution {
    #[serde(default)]
    pub institution_id: i64,
    pub name: String,
    pub country: String,
    #[serde(default = "zero")]
    pub amount: BigDecimal,
    #[serde(default = "zero")]
    pub budget: BigDecimal,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl FundingInstitution {
    pub fn new(name: &str, country: &str) -> Self {
        let ts = now();
        Self {
            institution_id: 0,
            name: name.to_string(),
            country: country.to_string(),
            amount: zero(),
            budget: zero(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for FundingInstitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingProposal {
    #[serde(default)]
    pub post_id: i64,
    #[serde(flatten)]
    pub post: PostShape,
    pub requested_amount: BigDecimal,
    #[serde(default)]
    pub proposal_status: ProposalStatus,
    pub posted_by: i64,
    pub funding_institution: i64,
    #[serde(default)]
    pub research_work: Option<i64>,
}

impl fmt::Display for FundingProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proposal: {} (${})",
            self.post.title,
            format_decimal(&self.requested_amount)
        )
    }
}

/// A researcher working on a work with backing from an institution.
///
/// Each (researcher, institution, work) triple appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaboration {
    #[serde(default)]
    pub collaboration_id: i64,
    pub researcher: i64,
    pub funding_institution: i64,
    pub research_work: i64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "zero")]
    pub contribution_amount: BigDecimal,
}

impl Collaboration {
    pub fn new(researcher: i64, funding_institution: i64, research_work: i64, start_date: NaiveDate) -> Self {
        Self {
            collaboration_id: 0,
            researcher,
            funding_institution,
            research_work,
            start_date,
            end_date: None,
            contribution_amount: zero(),
        }
    }
}

impl fmt::Display for Collaboration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Researcher #{} ↔ Institution #{} ↔ Work #{}",
            self.researcher, self.funding_institution, self.research_work
        )
    }
}

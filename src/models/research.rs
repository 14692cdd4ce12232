//! Researchers and their works.

use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::choices::WorkStatus;
use super::values::{now, zero, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Researcher {
    /// Assigned on create when zero.
    #[serde(default)]
    pub researcher_id: i64,
    pub name: String,
    pub email: String,
    pub country: String,
    pub institution: String,
    #[serde(default = "zero")]
    pub total_star: BigDecimal,
    #[serde(default = "zero")]
    pub peer_rating: BigDecimal,
    pub interest: String,
    /// Path of an uploaded CV, if any
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub research_work: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub github: String,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl Researcher {
    pub fn new(name: &str, email: &str, institution: &str, country: &str, interest: &str) -> Self {
        let ts = now();
        Self {
            researcher_id: 0,
            name: name.to_string(),
            email: email.to_string(),
            country: country.to_string(),
            institution: institution.to_string(),
            total_star: zero(),
            peer_rating: zero(),
            interest: interest.to_string(),
            cv: None,
            research_work: String::new(),
            project: String::new(),
            github: String::new(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for Researcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.institution)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchWork {
    #[serde(default)]
    pub work_id: i64,
    pub title: String,
    pub name: String,
    pub author_name: String,
    pub publisher: String,
    #[serde(default)]
    pub citation: i64,
    #[serde(default)]
    pub status: WorkStatus,
    /// Open for collaboration
    #[serde(default)]
    pub vacancy_status: bool,
    pub subfield: String,
    /// Name of the problem this work solves
    #[serde(default)]
    pub solves_problem: Option<String>,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl ResearchWork {
    pub fn new(title: &str, name: &str, author_name: &str, publisher: &str, subfield: &str) -> Self {
        let ts = now();
        Self {
            work_id: 0,
            title: title.to_string(),
            name: name.to_string(),
            author_name: author_name.to_string(),
            publisher: publisher.to_string(),
            citation: 0,
            status: WorkStatus::default(),
            vacancy_status: false,
            subfield: subfield.to_string(),
            solves_problem: None,
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for ResearchWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Citations: {})", self.title, self.citation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        let ada = Researcher::new("Ada", "ada@mit.edu", "MIT", "US", "Genomics");
        assert_eq!(ada.to_string(), "Ada (MIT)");

        let mut work = ResearchWork::new("Folding", "fold", "Ada", "Nature", "Genetics");
        work.citation = 12;
        assert_eq!(work.to_string(), "Folding (Citations: 12)");
    }

    #[test]
    fn test_work_defaults_from_json() {
        let json = r#"{
            "title": "Folding",
            "name": "fold",
            "author_name": "Ada",
            "publisher": "Nature",
            "subfield": "Genetics"
        }"#;
        let work: ResearchWork = serde_json::from_str(json).unwrap();
        assert_eq!(work.work_id, 0);
        assert_eq!(work.status, WorkStatus::Draft);
        assert!(!work.vacancy_status);
        assert!(work.solves_problem.is_none());
    }
}

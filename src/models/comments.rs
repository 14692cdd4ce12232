//! Peer-evaluation comments tied to a (researcher, work) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::shapes::CommentShape;

fn default_score() -> i64 {
    5
}

/// Scores run 1 to 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    #[serde(default)]
    pub comment_id: i64,
    #[serde(flatten)]
    pub comment: CommentShape,
    #[serde(default = "default_score")]
    pub punctual_score: i64,
    #[serde(default = "default_score")]
    pub consistency: i64,
    #[serde(default = "default_score")]
    pub hard_working: i64,
    pub researcher: i64,
    pub research_work: i64,
}

impl Mentor {
    pub fn new(content: &str, researcher: i64, research_work: i64) -> Self {
        Self {
            comment_id: 0,
            comment: CommentShape::new(content),
            punctual_score: default_score(),
            consistency: default_score(),
            hard_working: default_score(),
            researcher,
            research_work,
        }
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mentor Comment by #{}", self.researcher)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoWorker {
    #[serde(default)]
    pub comment_id: i64,
    #[serde(flatten)]
    pub comment: CommentShape,
    pub strength: String,
    #[serde(default = "default_score")]
    pub hard_working: i64,
    pub researcher: i64,
    pub research_work: i64,
}

impl CoWorker {
    pub fn new(content: &str, strength: &str, researcher: i64, research_work: i64) -> Self {
        Self {
            comment_id: 0,
            comment: CommentShape::new(content),
            strength: strength.to_string(),
            hard_working: default_score(),
            researcher,
            research_work,
        }
    }
}

impl fmt::Display for CoWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Co-Worker Comment by #{}", self.researcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_defaults_from_json() {
        let json = r#"{ "content": "Great mentor", "researcher": 1, "research_work": 2 }"#;
        let mentor: Mentor = serde_json::from_str(json).unwrap();
        assert_eq!(mentor.comment.rating, 3);
        assert_eq!(mentor.punctual_score, 5);
        assert_eq!(mentor.consistency, 5);
        assert_eq!(mentor.hard_working, 5);
    }

    #[test]
    fn test_coworker_requires_strength() {
        let json = r#"{ "content": "Solid", "researcher": 1, "research_work": 2 }"#;
        assert!(serde_json::from_str::<CoWorker>(json).is_err());
    }
}

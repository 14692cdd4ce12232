//! Project collaboration and query posts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::choices::QueryType;
use super::shapes::PostShape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectColab {
    #[serde(default)]
    pub post_id: i64,
    #[serde(flatten)]
    pub post: PostShape,
    pub project_name: String,
    pub required_skills: String,
    pub duration: String,
    /// Researcher id
    pub posted_by: i64,
}

impl fmt::Display for ProjectColab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project: {}", self.project_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPost {
    #[serde(default)]
    pub post_id: i64,
    #[serde(flatten)]
    pub post: PostShape,
    #[serde(default)]
    pub query_type: QueryType,
    #[serde(default)]
    pub is_answered: bool,
    pub posted_by: i64,
}

impl QueryPost {
    pub fn new(title: &str, content: &str, posted_by: i64) -> Self {
        Self {
            post_id: 0,
            post: PostShape::new(title, content),
            query_type: QueryType::default(),
            is_answered: false,
            posted_by,
        }
    }
}

impl fmt::Display for QueryPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query: {}", self.post.title)
    }
}

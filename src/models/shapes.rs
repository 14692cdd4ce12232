//! Record shapes shared by several concrete entities.
//!
//! There is no table for a shape; each concrete entity embeds one and stores
//! its columns inline.

use serde::{Deserialize, Serialize};

use super::values::{now, Timestamp};

/// Common part of project, query, and funding posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostShape {
    pub title: String,
    pub content: String,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl PostShape {
    pub fn new(title: &str, content: &str) -> Self {
        let ts = now();
        Self {
            title: title.to_string(),
            content: content.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

fn default_rating() -> i64 {
    3
}

/// Common part of mentor and co-worker comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentShape {
    pub content: String,
    /// 1 to 5
    #[serde(default = "default_rating")]
    pub rating: i64,
    #[serde(default = "now")]
    pub created_at: Timestamp,
}

impl CommentShape {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            rating: default_rating(),
            created_at: now(),
        }
    }
}

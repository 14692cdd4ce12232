//! Conversations between researchers and the messages in them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::values::{format_timestamp, now, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub conversation_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default = "now")]
    pub created_at: Timestamp,
    #[serde(default = "now")]
    pub updated_at: Timestamp,
}

impl Conversation {
    pub fn new(title: &str) -> Self {
        let ts = now();
        Self {
            conversation_id: 0,
            title: title.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conversation #{}", self.conversation_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message_id: i64,
    pub body: String,
    #[serde(default = "now")]
    pub time_date: Timestamp,
    pub sender: i64,
    pub receiver: i64,
    pub conversation: i64,
}

impl Message {
    pub fn new(body: &str, sender: i64, receiver: i64, conversation: i64) -> Self {
        Self {
            message_id: 0,
            body: body.to_string(),
            time_date: now(),
            sender,
            receiver,
            conversation,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message from #{} at {}",
            self.sender,
            format_timestamp(&self.time_date)
        )
    }
}

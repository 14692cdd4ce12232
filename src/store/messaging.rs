//! Persistence for conversations and messages.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{SchemaRelation, CONVERSATION, MESSAGE};
use crate::db::DatabaseBackend;
use crate::models::{Conversation, Message, Timestamp};
use crate::validation::{ValidationError, Validator};

use super::record::{list_where, Record};
use super::row::{int, text, timestamp, RowReader};
use super::StoreError;

impl Record for Conversation {
    const RELATION: &'static SchemaRelation = &CONVERSATION;

    fn key(&self) -> DataValue {
        int(self.conversation_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.conversation_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int(self.conversation_id),
            text(&self.title),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Conversation {
            conversation_id: r.int(0)?,
            title: r.string(1)?,
            created_at: r.timestamp(2)?,
            updated_at: r.timestamp(3)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("conversation")
            .max_length("title", &self.title, 200)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    /// Most recently active first.
    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| b.conversation_id.cmp(&a.conversation_id))
    }
}

impl Record for Message {
    const RELATION: &'static SchemaRelation = &MESSAGE;

    fn key(&self) -> DataValue {
        int(self.message_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.message_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int(self.message_id),
            text(&self.body),
            timestamp(&self.time_date),
            int(self.sender),
            int(self.receiver),
            int(self.conversation),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Message {
            message_id: r.int(0)?,
            body: r.string(1)?,
            time_date: r.timestamp(2)?,
            sender: r.int(3)?,
            receiver: r.int(4)?,
            conversation: r.int(5)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("message").required("body", &self.body).finish()
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.time_date
            .cmp(&b.time_date)
            .then_with(|| a.message_id.cmp(&b.message_id))
    }
}

/// Messages of a conversation, oldest first.
pub fn messages_in(db: &dyn DatabaseBackend, conversation_id: i64) -> Result<Vec<Message>, StoreError> {
    list_where(db, "conversation", conversation_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::create;
    use crate::test_utils::{sample_researcher, setup_store};

    #[test]
    fn test_messages_in_conversation_oldest_first() {
        let db = setup_store();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let bob = create(&*db, sample_researcher("Bob")).unwrap();
        let chat = create(&*db, Conversation::new("Folding")).unwrap();

        create(&*db, Message::new("hi", ada.researcher_id, bob.researcher_id, chat.conversation_id)).unwrap();
        create(&*db, Message::new("hello", bob.researcher_id, ada.researcher_id, chat.conversation_id)).unwrap();

        let bodies: Vec<_> = messages_in(&*db, chat.conversation_id)
            .unwrap()
            .into_iter()
            .map(|m| m.body)
            .collect();
        assert_eq!(bodies, vec!["hi", "hello"]);
        assert_eq!(chat.to_string(), "Conversation #1");
    }

    #[test]
    fn test_message_requires_receiver() {
        let db = setup_store();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let chat = create(&*db, Conversation::new("")).unwrap();
        let err = create(&*db, Message::new("hi", ada.researcher_id, 77, chat.conversation_id)).unwrap_err();
        assert!(matches!(err, StoreError::MissingReference { field: "receiver", .. }));
    }

    #[test]
    fn test_empty_body_rejected() {
        let db = setup_store();
        let err = create(&*db, Message::new("  ", 1, 2, 3)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}

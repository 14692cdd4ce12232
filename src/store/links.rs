//! Many-to-many links between entities.
//!
//! Linking is idempotent and unlinking a pair that is not linked is a no-op.
//! Both ends must exist when linking.

use cozo::DataValue;

use crate::db::schema::{
    CozoCompiler, SchemaRelation, CONVERSATION_PARTICIPANT, QUERY_FEEDBACK, RESEARCHER_EXPERTISE,
    RESEARCHER_FRIEND, WORK_AUTHOR,
};
use crate::db::{row_literal, run_query, DatabaseBackend, Params};
use crate::models::{Field, ResearchWork, Researcher};
use crate::validation::ValidationError;

use super::record::{check_integrity, decode_sorted, put_rows, Record};
use super::row::{int, text};
use super::StoreError;

fn link(db: &dyn DatabaseBackend, relation: &SchemaRelation, pair: [DataValue; 2]) -> Result<(), StoreError> {
    let row = pair.to_vec();
    check_integrity(db, relation, &row)?;
    put_rows(db, relation, &[row])?;
    tracing::debug!(relation = relation.name, pair = %row_literal(&pair), "linked");
    Ok(())
}

fn unlink(db: &dyn DatabaseBackend, relation: &SchemaRelation, pair: [DataValue; 2]) -> Result<(), StoreError> {
    let script = CozoCompiler::compile_remove(relation, &[row_literal(&pair)]);
    run_query(db, &script, Params::new())?;
    Ok(())
}

/// Records of type `R` linked to `value` through `link`.
fn linked<R: Record>(
    db: &dyn DatabaseBackend,
    link: &SchemaRelation,
    from_column: &str,
    to_column: &str,
    value: DataValue,
) -> Result<Vec<R>, StoreError> {
    let script = CozoCompiler::compile_linked(link, from_column, to_column, R::RELATION);
    let mut params = Params::new();
    params.insert("value".to_string(), value);
    decode_sorted(run_query(db, &script, params)?.rows)
}

// Expertise: Researcher <-> Field

pub fn add_expertise(db: &dyn DatabaseBackend, researcher_id: i64, field: &str) -> Result<(), StoreError> {
    link(db, &RESEARCHER_EXPERTISE, [int(researcher_id), text(field)])
}

pub fn remove_expertise(db: &dyn DatabaseBackend, researcher_id: i64, field: &str) -> Result<(), StoreError> {
    unlink(db, &RESEARCHER_EXPERTISE, [int(researcher_id), text(field)])
}

/// Fields a researcher is an expert in, in field order.
pub fn expert_fields(db: &dyn DatabaseBackend, researcher_id: i64) -> Result<Vec<Field>, StoreError> {
    linked(db, &RESEARCHER_EXPERTISE, "researcher_id", "field", int(researcher_id))
}

pub fn expert_researchers(db: &dyn DatabaseBackend, field: &str) -> Result<Vec<Researcher>, StoreError> {
    linked(db, &RESEARCHER_EXPERTISE, "field", "researcher_id", text(field))
}

/// Comma-joined names of a researcher's expert fields.
pub fn expertise_summary(db: &dyn DatabaseBackend, researcher_id: i64) -> Result<String, StoreError> {
    Ok(expert_fields(db, researcher_id)?
        .into_iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(", "))
}

// Friendship: symmetric, stored once as (low, high)

fn friend_pair(a: i64, b: i64) -> Result<[DataValue; 2], StoreError> {
    if a == b {
        return Err(ValidationError::single(
            "researcher_friend",
            "high",
            "A researcher cannot be their own friend",
        )
        .into());
    }
    Ok([int(a.min(b)), int(a.max(b))])
}

pub fn add_friend(db: &dyn DatabaseBackend, a: i64, b: i64) -> Result<(), StoreError> {
    link(db, &RESEARCHER_FRIEND, friend_pair(a, b)?)
}

pub fn remove_friend(db: &dyn DatabaseBackend, a: i64, b: i64) -> Result<(), StoreError> {
    unlink(db, &RESEARCHER_FRIEND, friend_pair(a, b)?)
}

/// Friends of a researcher, whichever side of the pair they are stored on.
pub fn friends_of(db: &dyn DatabaseBackend, researcher_id: i64) -> Result<Vec<Researcher>, StoreError> {
    let mut friends: Vec<Researcher> = linked(db, &RESEARCHER_FRIEND, "low", "high", int(researcher_id))?;
    friends.extend(linked::<Researcher>(db, &RESEARCHER_FRIEND, "high", "low", int(researcher_id))?);
    friends.sort_by(Researcher::ordering);
    Ok(friends)
}

// Authorship: ResearchWork <-> Researcher

pub fn add_author(db: &dyn DatabaseBackend, work_id: i64, researcher_id: i64) -> Result<(), StoreError> {
    link(db, &WORK_AUTHOR, [int(work_id), int(researcher_id)])
}

pub fn remove_author(db: &dyn DatabaseBackend, work_id: i64, researcher_id: i64) -> Result<(), StoreError> {
    unlink(db, &WORK_AUTHOR, [int(work_id), int(researcher_id)])
}

pub fn researchers_of(db: &dyn DatabaseBackend, work_id: i64) -> Result<Vec<Researcher>, StoreError> {
    linked(db, &WORK_AUTHOR, "work_id", "researcher_id", int(work_id))
}

pub fn works_of(db: &dyn DatabaseBackend, researcher_id: i64) -> Result<Vec<ResearchWork>, StoreError> {
    linked(db, &WORK_AUTHOR, "researcher_id", "work_id", int(researcher_id))
}

// Conversation participants

pub fn add_participant(db: &dyn DatabaseBackend, conversation_id: i64, researcher_id: i64) -> Result<(), StoreError> {
    link(db, &CONVERSATION_PARTICIPANT, [int(conversation_id), int(researcher_id)])
}

pub fn remove_participant(
    db: &dyn DatabaseBackend,
    conversation_id: i64,
    researcher_id: i64,
) -> Result<(), StoreError> {
    unlink(db, &CONVERSATION_PARTICIPANT, [int(conversation_id), int(researcher_id)])
}

pub fn participants_of(db: &dyn DatabaseBackend, conversation_id: i64) -> Result<Vec<Researcher>, StoreError> {
    linked(db, &CONVERSATION_PARTICIPANT, "conversation_id", "researcher_id", int(conversation_id))
}

// Query feedback: QueryPost <-> Researcher

pub fn add_feedback(db: &dyn DatabaseBackend, post_id: i64, researcher_id: i64) -> Result<(), StoreError> {
    link(db, &QUERY_FEEDBACK, [int(post_id), int(researcher_id)])
}

pub fn remove_feedback(db: &dyn DatabaseBackend, post_id: i64, researcher_id: i64) -> Result<(), StoreError> {
    unlink(db, &QUERY_FEEDBACK, [int(post_id), int(researcher_id)])
}

/// Researchers who gave feedback on a query post.
pub fn feedback_from(db: &dyn DatabaseBackend, post_id: i64) -> Result<Vec<Researcher>, StoreError> {
    linked(db, &QUERY_FEEDBACK, "post_id", "researcher_id", int(post_id))
}

//! Entity store for the research directory.
//!
//! Models are plain structs; this module maps them onto Cozo relations.
//! Every function takes an explicit `&dyn DatabaseBackend`.
//!
//! - `record`: the `Record` trait and generic create/read/update
//! - one module per entity group with its `Record` impls and traversals
//! - `links`: many-to-many link relations
//! - `cascade`: deletes along the foreign-key graph
//! - `kind`: entity kinds addressable by name

mod cascade;
mod classification;
mod comments;
mod funding;
mod kind;
mod links;
mod messaging;
mod posts;
mod record;
mod research;
pub mod row;
mod sequence;

use std::error::Error;

use thiserror::Error;

use crate::validation::ValidationError;

pub use cascade::{delete, DeleteSummary, RelationCount};
pub use classification::{problems_of, solved_by, subfields_of};
pub use kind::EntityKind;
pub use links::{
    add_author, add_expertise, add_feedback, add_friend, add_participant, expert_fields,
    expert_researchers, expertise_summary, feedback_from, friends_of, participants_of,
    remove_author, remove_expertise, remove_feedback, remove_friend, remove_participant,
    researchers_of, works_of,
};
pub use messaging::messages_in;
pub use posts::proposals_for_institution;
pub use record::{create, get, list, list_where, require, update, Record};
pub(crate) use record::decode_sorted;
pub use research::works_in_subfield;
pub use row::IntoKey;
pub use sequence::{next_id, peek};

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Duplicate {entity}: {fields} = {value} already exists")]
    Unique {
        entity: &'static str,
        fields: String,
        value: String,
    },

    #[error("Invalid {entity}.{field}: {target} {key} does not exist")]
    MissingReference {
        entity: &'static str,
        field: &'static str,
        target: &'static str,
        key: String,
    },

    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt {relation} row: {row}")]
    CorruptRow { relation: &'static str, row: String },
}

impl From<Box<dyn Error>> for StoreError {
    fn from(err: Box<dyn Error>) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl StoreError {
    /// Offending field names for validation-class errors.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            StoreError::Validation(err) => err.fields(),
            StoreError::Unique { fields, .. } => fields.split(", ").collect(),
            StoreError::MissingReference { field, .. } => vec![*field],
            _ => Vec::new(),
        }
    }
}

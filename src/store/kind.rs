//! Entity kinds addressable by name from the command line and the web layer.

use clap::ValueEnum;
use cozo::DataValue;
use serde::Serialize;

use crate::db::schema::{
    DataType, SchemaRelation, COLLABORATION, CONVERSATION, COWORKER, FIELD, FUNDING_INSTITUTION,
    FUNDING_PROPOSAL, MENTOR, MESSAGE, PROBLEM, PROJECT_COLAB, QUERY_POST, RESEARCHER, RESEARCH_WORK,
    SUBFIELD,
};
use crate::db::DatabaseBackend;
use crate::models::{
    CoWorker, Collaboration, Conversation, Field, FundingInstitution, FundingProposal, Mentor, Message,
    Problem, ProjectColab, QueryPost, ResearchWork, Researcher, Subfield,
};
use crate::validation::ValidationError;

use super::record::require;
use super::row::{int, text};
use super::StoreError;

/// One concrete entity relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum EntityKind {
    Field,
    Subfield,
    Problem,
    Researcher,
    ResearchWork,
    FundingInstitution,
    ProjectColab,
    QueryPost,
    FundingProposal,
    Conversation,
    Message,
    Mentor,
    Coworker,
    Collaboration,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Field,
        EntityKind::Subfield,
        EntityKind::Problem,
        EntityKind::Researcher,
        EntityKind::ResearchWork,
        EntityKind::FundingInstitution,
        EntityKind::ProjectColab,
        EntityKind::QueryPost,
        EntityKind::FundingProposal,
        EntityKind::Conversation,
        EntityKind::Message,
        EntityKind::Mentor,
        EntityKind::Coworker,
        EntityKind::Collaboration,
    ];

    pub fn relation(&self) -> &'static SchemaRelation {
        match self {
            EntityKind::Field => &FIELD,
            EntityKind::Subfield => &SUBFIELD,
            EntityKind::Problem => &PROBLEM,
            EntityKind::Researcher => &RESEARCHER,
            EntityKind::ResearchWork => &RESEARCH_WORK,
            EntityKind::FundingInstitution => &FUNDING_INSTITUTION,
            EntityKind::ProjectColab => &PROJECT_COLAB,
            EntityKind::QueryPost => &QUERY_POST,
            EntityKind::FundingProposal => &FUNDING_PROPOSAL,
            EntityKind::Conversation => &CONVERSATION,
            EntityKind::Message => &MESSAGE,
            EntityKind::Mentor => &MENTOR,
            EntityKind::Coworker => &COWORKER,
            EntityKind::Collaboration => &COLLABORATION,
        }
    }

    pub fn name(&self) -> &'static str {
        self.relation().name
    }

    /// Parse a key typed by a user into the stored key cell.
    pub fn parse_key(&self, raw: &str) -> Result<DataValue, StoreError> {
        let relation = self.relation();
        let key_field = &relation.key_fields[0];
        match key_field.data_type {
            DataType::Int => raw.trim().parse::<i64>().map(int).map_err(|_| {
                ValidationError::single(relation.name, key_field.name, format!("'{}' is not an integer id", raw))
                    .into()
            }),
            _ => Ok(text(raw)),
        }
    }

    /// Fetch one record as JSON, or `NotFound`.
    pub fn fetch_json(&self, db: &dyn DatabaseBackend, key: &DataValue) -> Result<serde_json::Value, StoreError> {
        match self {
            EntityKind::Field => to_json(require::<Field>(db, key)?),
            EntityKind::Subfield => to_json(require::<Subfield>(db, key)?),
            EntityKind::Problem => to_json(require::<Problem>(db, key)?),
            EntityKind::Researcher => to_json(require::<Researcher>(db, key)?),
            EntityKind::ResearchWork => to_json(require::<ResearchWork>(db, key)?),
            EntityKind::FundingInstitution => to_json(require::<FundingInstitution>(db, key)?),
            EntityKind::ProjectColab => to_json(require::<ProjectColab>(db, key)?),
            EntityKind::QueryPost => to_json(require::<QueryPost>(db, key)?),
            EntityKind::FundingProposal => to_json(require::<FundingProposal>(db, key)?),
            EntityKind::Conversation => to_json(require::<Conversation>(db, key)?),
            EntityKind::Message => to_json(require::<Message>(db, key)?),
            EntityKind::Mentor => to_json(require::<Mentor>(db, key)?),
            EntityKind::Coworker => to_json(require::<CoWorker>(db, key)?),
            EntityKind::Collaboration => to_json(require::<Collaboration>(db, key)?),
        }
    }
}

fn to_json<T: Serialize + std::fmt::Display>(record: T) -> Result<serde_json::Value, StoreError> {
    let mut value = serde_json::to_value(&record).map_err(|e| StoreError::Database(e.to_string()))?;
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("display".to_string(), serde_json::Value::String(record.to_string()));
    }
    Ok(value)
}

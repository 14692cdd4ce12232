//! Schema migrations.
//!
//! The schema version is implied by which relations exist. Running the
//! migrations is idempotent: relations that already exist are left alone.

use std::error::Error;

use crate::db::backend::DatabaseBackend;
use crate::db::schema::compilers::CozoCompiler;
use crate::db::schema::relations::relation_by_name;

/// A set of relations introduced together.
#[derive(Debug)]
pub struct MigrationSet {
    pub version: u32,
    pub description: &'static str,
    pub relations: &'static [&'static str],
}

pub const MIGRATION_SETS: &[MigrationSet] = &[MigrationSet {
    version: 1,
    description: "Initial directory schema",
    relations: &[
        "field",
        "subfield",
        "problem",
        "researcher",
        "research_work",
        "funding_institution",
        "project_colab",
        "query_post",
        "funding_proposal",
        "conversation",
        "message",
        "mentor",
        "coworker",
        "collaboration",
        "researcher_expertise",
        "researcher_friend",
        "work_author",
        "conversation_participant",
        "query_feedback",
        "sequence",
    ],
}];

/// Outcome of creating one relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationStatus {
    pub name: &'static str,
    pub created: bool,
}

/// Highest migration version whose relations all exist, or 0.
pub fn get_current_version(backend: &dyn DatabaseBackend) -> Result<u32, Box<dyn Error>> {
    let mut version = 0;
    for set in MIGRATION_SETS {
        for name in set.relations {
            if !backend.relation_exists(name)? {
                return Ok(version);
            }
        }
        version = set.version;
    }
    Ok(version)
}

/// Relations that `run_migrations` would create.
pub fn pending_relations(backend: &dyn DatabaseBackend) -> Result<Vec<&'static str>, Box<dyn Error>> {
    let mut pending = Vec::new();
    for set in MIGRATION_SETS {
        for name in set.relations {
            if !backend.relation_exists(name)? {
                pending.push(*name);
            }
        }
    }
    Ok(pending)
}

/// Run all pending migrations, reporting per relation whether it was created.
pub fn run_migrations(backend: &dyn DatabaseBackend) -> Result<Vec<RelationStatus>, Box<dyn Error>> {
    let current_version = get_current_version(backend)?;
    let mut statuses = Vec::new();

    for set in MIGRATION_SETS {
        for relation_name in set.relations {
            let relation = relation_by_name(relation_name)
                .ok_or_else(|| format!("Unknown relation: {}", relation_name))?;

            let created = if set.version <= current_version {
                false
            } else {
                backend.try_create_relation(&CozoCompiler::compile_relation(relation))?
            };

            if created {
                tracing::info!(relation = relation.name, "created relation");
            }
            statuses.push(RelationStatus {
                name: relation.name,
                created,
            });
        }
    }

    Ok(statuses)
}

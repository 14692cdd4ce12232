//! Bulk load of a directory JSON dump.
//!
//! Every row goes through the store, so a dump is held to the same
//! validation and integrity rules as any other write. Sections load parents
//! first; the first failing row aborts the import with its section named.

use std::error::Error;

use serde::Serialize;
use thiserror::Error;

use crate::db::schema::{run_migrations, RelationStatus};
use crate::db::DatabaseBackend;
use crate::queries::import_models::DirectoryDump;
use crate::store::{self, Record, StoreError};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read directory file '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse directory JSON: {message}")]
    JsonParseFailed { message: String },

    #[error("Failed to import {section} #{index}: {source}")]
    RowFailed {
        section: &'static str,
        index: usize,
        #[source]
        source: StoreError,
    },
}

/// Rows written for one dump section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCount {
    pub section: &'static str,
    pub count: usize,
}

/// Result of the import command execution
#[derive(Debug, Default, Serialize)]
pub struct ImportResult {
    /// Relations created before loading
    pub created_relations: Vec<String>,
    pub sections: Vec<SectionCount>,
}

impl ImportResult {
    pub fn count(&self, section: &str) -> usize {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.count).sum()
    }
}

/// Parse a dump and load it.
pub fn import_json_str(db: &dyn DatabaseBackend, content: &str) -> Result<ImportResult, Box<dyn Error>> {
    let dump: DirectoryDump = serde_json::from_str(content).map_err(|e| ImportError::JsonParseFailed {
        message: e.to_string(),
    })?;
    import_directory(db, &dump)
}

/// Create any missing relations, then load every section in dependency order.
pub fn import_directory(db: &dyn DatabaseBackend, dump: &DirectoryDump) -> Result<ImportResult, Box<dyn Error>> {
    let created_relations = run_migrations(db)?
        .into_iter()
        .filter(|status: &RelationStatus| status.created)
        .map(|status| status.name.to_string())
        .collect();

    let mut result = ImportResult {
        created_relations,
        sections: Vec::new(),
    };

    import_records(db, &mut result, "fields", &dump.fields)?;
    import_records(db, &mut result, "subfields", &dump.subfields)?;
    import_records(db, &mut result, "problems", &dump.problems)?;
    import_records(db, &mut result, "researchers", &dump.researchers)?;
    import_records(db, &mut result, "research_works", &dump.research_works)?;
    import_records(db, &mut result, "funding_institutions", &dump.funding_institutions)?;
    import_records(db, &mut result, "project_colabs", &dump.project_colabs)?;
    import_records(db, &mut result, "query_posts", &dump.query_posts)?;
    import_records(db, &mut result, "funding_proposals", &dump.funding_proposals)?;
    import_records(db, &mut result, "conversations", &dump.conversations)?;
    import_records(db, &mut result, "messages", &dump.messages)?;
    import_records(db, &mut result, "mentors", &dump.mentors)?;
    import_records(db, &mut result, "coworkers", &dump.coworkers)?;
    import_records(db, &mut result, "collaborations", &dump.collaborations)?;

    let links = &dump.links;
    import_links(&mut result, "expertise", &links.expertise, |l| {
        store::add_expertise(db, l.researcher_id, &l.field)
    })?;
    import_links(&mut result, "friends", &links.friends, |l| {
        store::add_friend(db, l.researcher, l.friend)
    })?;
    import_links(&mut result, "authors", &links.authors, |l| {
        store::add_author(db, l.work_id, l.researcher_id)
    })?;
    import_links(&mut result, "participants", &links.participants, |l| {
        store::add_participant(db, l.conversation_id, l.researcher_id)
    })?;
    import_links(&mut result, "feedback", &links.feedback, |l| {
        store::add_feedback(db, l.post_id, l.researcher_id)
    })?;

    tracing::info!(rows = result.total(), "directory imported");
    Ok(result)
}

fn import_records<R: Record + Clone>(
    db: &dyn DatabaseBackend,
    result: &mut ImportResult,
    section: &'static str,
    records: &[R],
) -> Result<(), ImportError> {
    for (index, record) in records.iter().enumerate() {
        store::create(db, record.clone()).map_err(|source| ImportError::RowFailed {
            section,
            index,
            source,
        })?;
    }
    push_count(result, section, records.len());
    Ok(())
}

fn import_links<L>(
    result: &mut ImportResult,
    section: &'static str,
    links: &[L],
    add: impl Fn(&L) -> Result<(), StoreError>,
) -> Result<(), ImportError> {
    for (index, link) in links.iter().enumerate() {
        add(link).map_err(|source| ImportError::RowFailed { section, index, source })?;
    }
    push_count(result, section, links.len());
    Ok(())
}

fn push_count(result: &mut ImportResult, section: &'static str, count: usize) {
    if count > 0 {
        result.sections.push(SectionCount { section, count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_mem_db;
    use crate::fixtures::DIRECTORY;
    use crate::models::{Problem, ResearchWork};
    use crate::store::{friends_of, require, solved_by};
    use crate::test_utils::setup_store;

    #[test]
    fn test_import_creates_relations_on_fresh_db() {
        let db = open_mem_db().unwrap();
        let result = import_json_str(db.as_ref(), DIRECTORY).unwrap();
        assert_eq!(result.created_relations.len(), 20);
        assert_eq!(result.count("fields"), 4);
        assert_eq!(result.count("subfields"), 6);
        assert_eq!(result.count("friends"), 2);
    }

    #[test]
    fn test_import_preserves_references() {
        let db = setup_store();
        let result = import_json_str(db.as_ref(), DIRECTORY).unwrap();
        assert!(result.created_relations.is_empty());

        let solver = solved_by(db.as_ref(), "Protein Folding").unwrap().unwrap();
        assert_eq!(solver.work_id, 1);
        let ada_friends: Vec<_> = friends_of(db.as_ref(), 1).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(ada_friends, vec!["Rosalind Franklin", "Alan Turing"]);
    }

    #[test]
    fn test_explicit_ids_advance_sequence() {
        let db = setup_store();
        import_json_str(db.as_ref(), DIRECTORY).unwrap();
        let work = store::create(db.as_ref(), crate::test_utils::sample_work("Next")).unwrap();
        assert_eq!(work.work_id, 4);
        assert_eq!(require::<ResearchWork>(db.as_ref(), 4i64).unwrap().title, "Next");
    }

    #[test]
    fn test_invalid_row_names_section() {
        let db = setup_store();
        let json = r#"{
            "fields": [{"name": "Biology", "domain": "Life Sciences", "area": "Biology", "field_type": "Natural"}],
            "subfields": [{"name": "Genetics", "field": "Biology", "field_type": "Natural", "domain": "Life Sciences"}],
            "researchers": [{"researcher_id": 1, "name": "Ada", "email": "ada@x.org", "country": "UK", "institution": "MIT", "interest": "i"}],
            "research_works": [{"work_id": 1, "title": "W", "name": "w", "author_name": "Ada", "publisher": "P", "subfield": "Genetics"}],
            "mentors": [{"content": "Too kind", "rating": 9, "researcher": 1, "research_work": 1}]
        }"#;
        let err = import_json_str(db.as_ref(), json).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to import mentors #0"), "{}", message);
        assert!(message.contains("rating"));
    }

    #[test]
    fn test_missing_parent_rejected() {
        let db = setup_store();
        let json = r#"{"problems": [{"name": "Orphan", "subfield": "Nowhere", "description": "d", "current_proceedings": "c"}]}"#;
        let err = import_json_str(db.as_ref(), json).unwrap_err();
        assert!(err.to_string().contains("subfield Nowhere does not exist"));
        assert!(require::<Problem>(db.as_ref(), "Orphan").is_err());
    }

    #[test]
    fn test_malformed_json() {
        let db = setup_store();
        let err = import_json_str(db.as_ref(), "{not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse directory JSON"));
    }
}

//! Shared test utilities for store, execute, and web tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::commands::Execute;
use crate::db::schema::run_migrations;
use crate::db::{open_mem_db, DatabaseBackend};
use crate::fixtures;
use crate::models::{Field, ResearchWork, Researcher, Subfield};
use crate::queries::import::import_json_str;
use crate::store::create;

/// Create a temporary file containing the given content.
///
/// Used to create JSON files for importing test data.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// In-memory database with every relation created.
pub fn setup_store() -> Box<dyn DatabaseBackend> {
    let db = open_mem_db().expect("Failed to open in-memory db");
    run_migrations(db.as_ref()).expect("Migrations should succeed");
    db
}

/// Store holding the Biology field with its Genetics and Ecology subfields.
pub fn setup_classification() -> Box<dyn DatabaseBackend> {
    let db = setup_store();
    create(db.as_ref(), Field::new("Biology", "Life Sciences", "Biology", "Natural")).expect("field");
    create(db.as_ref(), Subfield::new("Genetics", "Biology", "Natural", "Life Sciences")).expect("subfield");
    create(db.as_ref(), Subfield::new("Ecology", "Biology", "Natural", "Life Sciences")).expect("subfield");
    db
}

/// Unsaved researcher with an email derived from the name.
pub fn sample_researcher(name: &str) -> Researcher {
    let email = format!("{}@example.org", name.to_lowercase().replace(' ', "."));
    Researcher::new(name, &email, "MIT", "US", "Genomics")
}

/// Unsaved work filed under Genetics.
pub fn sample_work(title: &str) -> ResearchWork {
    ResearchWork::new(title, title, "Ada Lovelace", "Nature", "Genetics")
}

/// Create an in-memory database and import JSON content.
///
/// This is the standard setup for execute tests: create an in-memory DB,
/// import test data, return the DB instance for command execution.
pub fn setup_test_db(json_content: &str) -> Box<dyn DatabaseBackend> {
    let db = setup_store();
    import_json_str(db.as_ref(), json_content).expect("Import should succeed");
    db
}

/// Store loaded with the sample directory in `fixtures::DIRECTORY`.
pub fn directory_db() -> Box<dyn DatabaseBackend> {
    setup_test_db(fixtures::DIRECTORY)
}

/// Execute a command against a database and return the result.
pub fn execute_cmd<C: Execute>(cmd: C, db: &dyn DatabaseBackend) -> Result<C::Output, Box<dyn std::error::Error>> {
    cmd.execute(db)
}

/// Execute a command against a database without any relations.
///
/// Used to verify commands fail gracefully before `setup`.
pub fn execute_on_empty_db<C: Execute>(cmd: C) -> Result<C::Output, Box<dyn std::error::Error>> {
    let db = open_mem_db()?;
    cmd.execute(db.as_ref())
}

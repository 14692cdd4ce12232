//! Query execution utilities.

use std::error::Error;

use super::backend::{DatabaseBackend, Params, QueryResult};

/// Run a query with parameters.
pub fn run_query(
    db: &dyn DatabaseBackend,
    script: &str,
    params: Params,
) -> Result<QueryResult, Box<dyn Error>> {
    db.execute_query(script, &params)
}

/// Run a query with no parameters
pub fn run_query_no_params(db: &dyn DatabaseBackend, script: &str) -> Result<QueryResult, Box<dyn Error>> {
    run_query(db, script, Params::new())
}

/// Try to create a relation, returning Ok(true) if created, Ok(false) if already exists
pub fn try_create_relation(db: &dyn DatabaseBackend, script: &str) -> Result<bool, Box<dyn Error>> {
    match run_query_no_params(db, script) {
        Ok(_) => Ok(true),
        Err(e) => {
            let err_str = e.to_string();
            if err_str.contains("AlreadyExists") || err_str.contains("stored_relation_conflict") {
                Ok(false)
            } else {
                Err(e)
            }
        }
    }
}

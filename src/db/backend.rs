//! Database backend trait.
//!
//! The directory only ships the CozoDB backend, but every caller goes through
//! this trait so the handle can be shared by the HTTP server and swapped for an
//! in-memory instance in tests.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;

use cozo::DataValue;

/// Type alias for query parameters.
pub type Params = BTreeMap<String, DataValue>;

/// Result of a query execution.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<DataValue>>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Trait for database backends that can execute queries.
pub trait DatabaseBackend: Send + Sync {
    /// Execute a script with parameters, returning raw rows.
    ///
    /// Scripts made of several `{ ... }` blocks run in a single transaction.
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, Box<dyn Error>>;

    /// Execute a script without parameters.
    fn execute_query_no_params(&self, script: &str) -> Result<QueryResult, Box<dyn Error>> {
        self.execute_query(script, &Params::new())
    }

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Check if a stored relation exists.
    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>>;

    /// Create a relation if it doesn't exist.
    /// Returns true if created, false if already existed.
    fn try_create_relation(&self, schema: &str) -> Result<bool, Box<dyn Error>>;

    /// Get a cheap shared handle to the same underlying database.
    fn share(&self) -> Arc<dyn DatabaseBackend>;
}

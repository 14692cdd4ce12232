//! Database connection management.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use cozo::{DataValue, DbInstance, ScriptMutability};

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::DbError;

/// CozoDB backend, either SQLite-backed or in-memory.
#[derive(Clone)]
pub struct CozoBackend {
    db: DbInstance,
    name: &'static str,
}

impl CozoBackend {
    pub fn sqlite(path: &Path) -> Result<Self, Box<dyn Error>> {
        let db = DbInstance::new("sqlite", path, "").map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { db, name: "CozoSqlite" })
    }

    pub fn mem() -> Result<Self, Box<dyn Error>> {
        let db = DbInstance::new("mem", "", "").map_err(|e| DbError::OpenFailed {
            path: ":memory:".to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { db, name: "CozoMem" })
    }
}

impl DatabaseBackend for CozoBackend {
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, Box<dyn Error>> {
        let rows = self
            .db
            .run_script(script, params.clone(), ScriptMutability::Mutable)
            .map_err(|e| DbError::QueryFailed {
                message: format!("{:?}", e),
            })?;
        Ok(QueryResult {
            headers: rows.headers,
            rows: rows.rows,
        })
    }

    fn backend_name(&self) -> &'static str {
        self.name
    }

    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>> {
        let result = self.execute_query_no_params("::relations")?;
        Ok(result
            .rows
            .iter()
            .any(|row| matches!(row.first(), Some(DataValue::Str(s)) if s.as_str() == name)))
    }

    fn try_create_relation(&self, schema: &str) -> Result<bool, Box<dyn Error>> {
        super::query::try_create_relation(self, schema)
    }

    fn share(&self) -> Arc<dyn DatabaseBackend> {
        Arc::new(self.clone())
    }
}

/// Open a CozoDB database backed by SQLite storage.
pub fn open_db(path: &Path) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
    Ok(Box::new(CozoBackend::sqlite(path)?))
}

/// Create an in-memory database instance.
///
/// Used by tests and by the `memory` database configuration.
pub fn open_mem_db() -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
    Ok(Box::new(CozoBackend::mem()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_mem_db() {
        let db = open_mem_db().unwrap();
        assert_eq!(db.backend_name(), "CozoMem");
    }

    #[test]
    fn test_open_sqlite_db() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir.path().join("test.sqlite")).unwrap();
        assert_eq!(db.backend_name(), "CozoSqlite");
    }

    #[test]
    fn test_relation_exists_after_create() {
        let db = open_mem_db().unwrap();
        assert!(!db.relation_exists("probe").unwrap());
        db.try_create_relation(":create probe { k: Int => v: String }").unwrap();
        assert!(db.relation_exists("probe").unwrap());
    }

    #[test]
    fn test_shared_handle_sees_same_data() {
        let db = open_mem_db().unwrap();
        db.try_create_relation(":create probe { k: Int => v: String }").unwrap();
        let shared = db.share();
        assert!(shared.relation_exists("probe").unwrap());
    }
}

use std::error::Error;
use std::fs;

use super::ImportCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::import::{import_json_str, ImportError, ImportResult};

impl Execute for ImportCmd {
    type Output = ImportResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let content = fs::read_to_string(&self.file).map_err(|e| ImportError::FileReadFailed {
            path: self.file.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(file = %self.file.display(), "importing directory");
        import_json_str(db, &content)
    }
}

use std::error::Error;

use super::SearchCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::search::{search_fields, FieldSearchResult};

impl Execute for SearchCmd {
    type Output = FieldSearchResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        search_fields(db, &self.query)
    }
}

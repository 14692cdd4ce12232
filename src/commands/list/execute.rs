use std::error::Error;

use super::ListCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::queries::listing::{list_entities, Listing};

impl Execute for ListCmd {
    type Output = Listing;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        list_entities(db, self.entity, &self.search, Some(self.limit as usize))
    }
}

mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::store::EntityKind;

/// Delete a record along with everything that depends on it
///
/// Dependent rows are removed along foreign keys; a research work that
/// solves a problem only clears the problem link on deletion of either side.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  research_directory delete field Biology       # Removes subfields, problems, and works beneath it
  research_directory delete researcher 3        # Removes posts, comments, and links of researcher 3")]
pub struct DeleteCmd {
    /// Entity kind
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Primary key: a name for fields, subfields, and problems, an id otherwise
    pub key: String,
}

impl CommandRunner for DeleteCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}

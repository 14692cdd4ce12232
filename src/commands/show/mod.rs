mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::store::EntityKind;

/// Show one record by its primary key
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  research_directory show field Biology        # Classification entities are keyed by name
  research_directory show researcher 1         # Everything else by id
  research_directory show message 3 -o json    # Machine-readable output")]
pub struct ShowCmd {
    /// Entity kind
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Primary key: a name for fields, subfields, and problems, an id otherwise
    pub key: String,
}

impl CommandRunner for ShowCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}

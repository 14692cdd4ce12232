mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};
use crate::store::EntityKind;

/// List records of one entity kind with their display columns
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  research_directory list field                      # Every field with its subfield count
  research_directory list researcher -s mit          # Researchers matching 'mit' in name, email, or institution
  research_directory list message -l 20              # First 20 messages with body previews
  research_directory list query_post -s turing       # Search by poster name")]
pub struct ListCmd {
    /// Entity kind to list
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Case-insensitive text to look for in the entity's search fields
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Maximum number of rows to show (1-1000)
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}

impl CommandRunner for ListCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}

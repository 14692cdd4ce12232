mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Search fields by name, domain, or area and show their subfields
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  research_directory search -q bio          # Fields mentioning 'bio' in name, domain, or area
  research_directory search -q Sciences     # Matching is case-insensitive
  research_directory search -q bio -o json  # Machine-readable output")]
pub struct SearchCmd {
    /// Substring to look for; an empty query matches nothing
    #[arg(short, long, default_value = "")]
    pub query: String,
}

impl CommandRunner for SearchCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}

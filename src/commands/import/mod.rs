mod cli_tests;
mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Import a directory JSON dump into the database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  research_directory import -f directory.json                 # Load a dump
  research_directory import -f directory.json --db ./dir.db   # Load into a specific file")]
pub struct ImportCmd {
    /// Path to the directory JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,
}

impl CommandRunner for ImportCmd {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(db)?;
        Ok(result.format(format))
    }
}

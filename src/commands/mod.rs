//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` producing a serializable result
//! - `output.rs` rendering that result as a table

mod delete;
mod import;
mod list;
mod search;
mod serve;
mod setup;
mod show;

pub use delete::DeleteCmd;
pub use import::ImportCmd;
pub use list::ListCmd;
pub use search::SearchCmd;
pub use serve::ServeCmd;
pub use setup::SetupCmd;
pub use show::ShowCmd;

use clap::Subcommand;
use enum_dispatch::enum_dispatch;
use std::error::Error;

use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>>;
}

/// Run a parsed command and render its result.
#[enum_dispatch]
pub trait CommandRunner {
    fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
#[enum_dispatch(CommandRunner)]
pub enum Command {
    /// Create the directory schema
    Setup(SetupCmd),

    /// Import a directory JSON dump into the database
    Import(ImportCmd),

    /// Search fields by name, domain, or area
    Search(SearchCmd),

    /// List records of one entity kind
    List(ListCmd),

    /// Show one record by key
    Show(ShowCmd),

    /// Delete a record and everything that depends on it
    Delete(DeleteCmd),

    /// Serve the field search over HTTP
    Serve(ServeCmd),
}

//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Directory of researchers, fields, and collaborations", long_about = None)]
pub struct Args {
    /// Database location: a SQLite file, `sqlite://path`, or `:memory:`
    ///
    /// If not specified, uses (in order):
    ///   1. the `database` section of .research_directory.json
    ///   2. the DATABASE_URL environment variable
    ///   3. .research_directory/cozo.sqlite (project-local)
    ///   4. ~/.research_directory/cozo.sqlite (user-global)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

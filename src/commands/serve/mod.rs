mod cli_tests;

use std::error::Error;

use clap::Args;

use crate::commands::CommandRunner;
use crate::config::{ConfigFile, DEFAULT_BIND};
use crate::db::DatabaseBackend;
use crate::output::OutputFormat;
use crate::web;

/// Serve the field search over HTTP
///
/// Routes: `/` renders a search box, `/search/?q=` renders matching fields
/// with their subfields.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  research_directory serve                       # Listen on the configured or default address
  research_directory serve --bind 0.0.0.0:8080   # Listen on all interfaces")]
pub struct ServeCmd {
    /// Address to listen on (defaults to the config file's server.bind, then 127.0.0.1:8000)
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeCmd {
    fn resolve_bind(&self) -> Result<String, Box<dyn Error>> {
        if let Some(bind) = &self.bind {
            return Ok(bind.clone());
        }
        Ok(ConfigFile::load_optional()?
            .map(|config| config.server.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string()))
    }
}

impl CommandRunner for ServeCmd {
    fn run(self, db: &dyn DatabaseBackend, _format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let bind = self.resolve_bind()?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(web::serve(db.share(), &bind))?;
        Ok(format!("Server on {} stopped.", bind))
    }
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use research_directory::cli::Args;
use research_directory::commands::CommandRunner;
use research_directory::db::DatabaseConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .init();

    let db = DatabaseConfig::resolve(args.db.as_deref())?.connect()?;
    let output = args.command.run(db.as_ref(), args.format)?;
    println!("{}", output);
    Ok(())
}

//! Database configuration for runtime backend selection.

use std::error::Error;
use std::path::{Path, PathBuf};

use super::backend::DatabaseBackend;
use super::connection::CozoBackend;
use super::DbError;

/// Default on-disk location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".research_directory/cozo.sqlite";

/// Configuration for database backend selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    /// Local CozoDB with SQLite storage.
    CozoSqlite { path: PathBuf },

    /// Local CozoDB with in-memory storage.
    CozoMem,
}

impl DatabaseConfig {
    /// Create a backend instance from this configuration.
    pub fn connect(&self) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
        let backend = match self {
            Self::CozoSqlite { path } => {
                ensure_parent_dir(path)?;
                CozoBackend::sqlite(path)?
            }
            Self::CozoMem => CozoBackend::mem()?,
        };
        tracing::debug!(backend = backend_label(self), "database opened");
        Ok(Box::new(backend))
    }

    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `./path/to/db.sqlite` or `/absolute/path` → CozoSqlite
    /// - `sqlite:///path/to/db` → CozoSqlite
    /// - `:memory:` → CozoMem
    pub fn from_url(url: &str) -> Result<Self, Box<dyn Error>> {
        if url == ":memory:" {
            return Ok(Self::CozoMem);
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            return Ok(Self::CozoSqlite {
                path: PathBuf::from(path),
            });
        }

        if url.contains("://") {
            return Err(DbError::UnsupportedUrl {
                url: url.to_string(),
                reason: "only sqlite:// and :memory: are supported".to_string(),
            }
            .into());
        }

        Ok(Self::CozoSqlite {
            path: PathBuf::from(url),
        })
    }

    /// Load from the `DATABASE_URL` environment variable.
    pub fn from_env() -> Result<Option<Self>, Box<dyn Error>> {
        match std::env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => Ok(Some(Self::from_url(&url)?)),
            _ => Ok(None),
        }
    }

    /// Resolve configuration.
    ///
    /// Priority: explicit path > config file > environment > default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        if let Some(path) = explicit {
            return Self::from_url(&path.to_string_lossy());
        }

        if let Some(config_file) = crate::config::ConfigFile::load_optional()? {
            return Ok(config_file.database.to_database_config());
        }

        if let Some(config) = Self::from_env()? {
            return Ok(config);
        }

        Ok(Self::CozoSqlite {
            path: default_db_path(),
        })
    }
}

/// Pick the default database location: project-local first, then user-global.
fn default_db_path() -> PathBuf {
    let project_db = PathBuf::from(DEFAULT_DB_PATH);
    if project_db.exists() {
        return project_db;
    }

    if let Some(home_dir) = home::home_dir() {
        let global_db = home_dir.join(DEFAULT_DB_PATH);
        if global_db.exists() {
            return global_db;
        }
    }

    project_db
}

fn ensure_parent_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn backend_label(config: &DatabaseConfig) -> &'static str {
    match config {
        DatabaseConfig::CozoSqlite { .. } => "sqlite",
        DatabaseConfig::CozoMem => "memory",
    }
}

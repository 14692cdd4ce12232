//! Database connection and query utilities for CozoDB.
//!
//! This module provides the storage layer for the directory:
//! - Connection management (SQLite-backed, or in-memory for tests)
//! - Query execution with parameter binding
//! - Literal rendering and row extraction helpers
//! - The declarative schema and its migrations (`schema`)
//!
//! # Architecture
//!
//! CozoDB is a Datalog database. Every concrete entity is a stored relation and
//! every many-to-many relationship is a link relation. Queries are written in
//! CozoScript and return rows of `DataValue` cells that the store converts into
//! model types.
//!
//! # Type Decisions
//!
//! **Why strings for decimals and timestamps?**
//! Cozo has no decimal or timestamp column type. Decimals are stored as their
//! canonical two-place string and parsed back with `bigdecimal`; timestamps are
//! fixed-width RFC 3339 UTC strings, which sort chronologically as text.
//!
//! **Why an explicit backend handle everywhere?**
//! Every store and query function receives `&dyn DatabaseBackend`. There is no
//! process-wide connection; the HTTP server shares one handle and opens a
//! session per request.

mod backend;
mod config;
mod connection;
mod escape;
mod extraction;
mod query;
pub mod schema;

pub use backend::{DatabaseBackend, Params, QueryResult};
pub use config::DatabaseConfig;
pub use connection::{open_db, open_mem_db, CozoBackend};

pub use escape::{escape_string, literal, row_literal};

pub use extraction::{
    bool_value, extract_bool, extract_i64, extract_opt_i64, extract_opt_string, extract_string,
    extract_string_or, int_value, opt_int_value, opt_str_value, str_value,
};

pub use query::{run_query, run_query_no_params, try_create_relation};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Unsupported database url '{url}': {reason}")]
    UnsupportedUrl { url: String, reason: String },
}

//! Database schema compilers.
//!
//! Converts `SchemaRelation` definitions into CozoScript: DDL for setup and
//! the `:put`/`:rm`/select scripts the store runs.

pub mod cozo;

pub use cozo::CozoCompiler;

//! Database schema definitions.
//!
//! The schema is declared once as `SchemaRelation` constants and everything
//! else is derived from it.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `DataType` - String, Int, Bool
//!    - `SchemaField` - a column with name, type, and nullability
//!    - `SchemaRelationship` - a foreign-key edge with its delete behaviour
//!    - `SchemaRelation` - key fields, value fields, edges, unique groups
//!
//! 2. **Relation Definitions** (`relations.rs`):
//!    - One constant per entity (`FIELD`, `SUBFIELD`, `PROBLEM`, ...)
//!    - Link relations (`RESEARCHER_EXPERTISE`, `RESEARCHER_FRIEND`, ...)
//!    - `ALL_RELATIONS`, parents before children
//!
//! 3. **Compiler** (`compilers/cozo.rs`): DDL and data scripts.
//!
//! 4. **Migrations** (`migrations.rs`): idempotent relation creation.

pub mod compilers;
mod definition;
pub mod migrations;
mod relations;

pub use compilers::CozoCompiler;
pub use definition::{DataType, OnDelete, SchemaField, SchemaRelation, SchemaRelationship};
pub use migrations::{get_current_version, pending_relations, run_migrations, RelationStatus};
pub use relations::*;

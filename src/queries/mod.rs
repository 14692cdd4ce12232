//! Read-side queries and bulk import.

pub mod builder;
pub mod import;
pub mod import_models;
pub mod listing;
pub mod search;

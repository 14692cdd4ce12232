//! research_directory library - directory of researchers and collaborations
//!
//! Provides the storage layer, command execution, output formatting, and the
//! HTTP field search for a directory of research fields, researchers, their
//! works, funding, and collaboration posts.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod models;
pub mod output;
pub mod queries;
pub mod store;
pub mod validation;
pub mod web;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;

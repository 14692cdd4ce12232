//! Query definitions compiled to CozoScript.
//!
//! A `QueryBuilder` knows its script and its parameters; `CompiledQuery`
//! pairs the two for execution against a backend.

use std::error::Error;

use crate::db::{run_query, DatabaseBackend, Params, QueryResult};

/// A read query over the directory relations.
pub trait QueryBuilder {
    /// CozoScript for this query. Parameters are referenced as `$name`.
    fn compile(&self) -> String;

    /// Values bound to the script's parameters.
    fn parameters(&self) -> Params;
}

/// A compiled query ready for execution.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    pub script: String,
    pub params: Params,
}

impl CompiledQuery {
    pub fn from_builder(builder: &dyn QueryBuilder) -> Self {
        CompiledQuery {
            script: builder.compile(),
            params: builder.parameters(),
        }
    }

    pub fn run(self, db: &dyn DatabaseBackend) -> Result<QueryResult, Box<dyn Error>> {
        run_query(db, &self.script, self.params)
    }
}

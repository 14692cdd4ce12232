use std::error::Error;

use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;
use crate::db::schema::{pending_relations, run_migrations, ALL_RELATIONS};
use crate::db::DatabaseBackend;

/// Status of a database relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RelationState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
    #[serde(rename = "would_create")]
    WouldCreate,
}

/// Status information for a single database relation
#[derive(Debug, Clone, Serialize)]
pub struct RelationStatus {
    pub name: String,
    pub status: RelationState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub relations: Vec<RelationStatus>,
    pub created_new: bool,
    pub dry_run: bool,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        if self.dry_run {
            let pending = pending_relations(db)?;
            let relations = ALL_RELATIONS
                .iter()
                .map(|relation| RelationStatus {
                    name: relation.name.to_string(),
                    status: if pending.contains(&relation.name) {
                        RelationState::WouldCreate
                    } else {
                        RelationState::AlreadyExists
                    },
                })
                .collect();

            return Ok(SetupResult {
                relations,
                created_new: false,
                dry_run: true,
            });
        }

        let relations: Vec<RelationStatus> = run_migrations(db)?
            .into_iter()
            .map(|status| RelationStatus {
                name: status.name.to_string(),
                status: if status.created {
                    RelationState::Created
                } else {
                    RelationState::AlreadyExists
                },
            })
            .collect();

        let created_new = relations
            .iter()
            .any(|r| matches!(r.status, RelationState::Created));

        tracing::info!(backend = db.backend_name(), created_new, "schema ready");
        Ok(SetupResult {
            relations,
            created_new,
            dry_run: false,
        })
    }
}

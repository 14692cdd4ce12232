use std::error::Error;

use super::DeleteCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::store::{delete, DeleteSummary};

impl Execute for DeleteCmd {
    type Output = DeleteSummary;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let key = self.entity.parse_key(&self.key)?;
        Ok(delete(db, self.entity, key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Problem, Subfield};
    use crate::store::{get, require, EntityKind};
    use crate::test_utils::directory_db;
    use rstest::{fixture, rstest};

    crate::directory_fixture! {
        fixture_name: populated_db,
    }

    // Physics → Quantum Mechanics, Optics → Decoherence, Qubit Stability → coworker, author link
    crate::execute_test! {
        test_name: test_delete_field_cascades,
        fixture: populated_db,
        cmd: DeleteCmd {
            entity: EntityKind::Field,
            key: "Physics".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.removed_in("field"), 1);
            assert_eq!(result.removed_in("subfield"), 2);
            assert_eq!(result.removed_in("problem"), 1);
            assert_eq!(result.removed_in("research_work"), 1);
            assert_eq!(result.removed_in("coworker"), 1);
            assert_eq!(result.unlinked_in("researcher_expertise"), 1);
            assert_eq!(result.unlinked_in("work_author"), 1);
        },
    }

    #[rstest]
    fn test_delete_solving_work_keeps_problem() {
        let db = directory_db();
        let summary = DeleteCmd {
            entity: EntityKind::ResearchWork,
            key: "1".to_string(),
        }
        .execute(db.as_ref())
        .unwrap();

        assert_eq!(summary.removed_in("problem"), 0);
        let problem = require::<Problem>(db.as_ref(), "Protein Folding").unwrap();
        assert_eq!(problem.name, "Protein Folding");
        assert_eq!(summary.removed_in("collaboration"), 2);
        assert_eq!(summary.removed_in("mentor"), 1);
        assert_eq!(summary.removed_in("funding_proposal"), 1);
        assert_eq!(summary.unlinked_in("work_author"), 2);
    }

    #[rstest]
    fn test_delete_leaf_subfield() {
        let db = directory_db();
        let summary = DeleteCmd {
            entity: EntityKind::Subfield,
            key: "Optics".to_string(),
        }
        .execute(db.as_ref())
        .unwrap();
        assert_eq!(summary.total_removed(), 1);
        assert!(get::<Subfield>(db.as_ref(), "Optics").unwrap().is_none());
    }

    #[rstest]
    fn test_delete_missing_key() {
        let db = directory_db();
        let err = DeleteCmd {
            entity: EntityKind::Conversation,
            key: "42".to_string(),
        }
        .execute(db.as_ref())
        .unwrap_err();
        assert_eq!(err.to_string(), "conversation 42 not found");
    }
}

use std::error::Error;

use serde::Serialize;

use super::ShowCmd;
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::store::EntityKind;

/// One fetched record
#[derive(Debug, Serialize)]
pub struct ShowResult {
    pub entity: EntityKind,
    pub key: String,
    pub record: serde_json::Value,
}

impl Execute for ShowCmd {
    type Output = ShowResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let key = self.entity.parse_key(&self.key)?;
        let record = self.entity.fetch_json(db, &key)?;
        Ok(ShowResult {
            entity: self.entity,
            key: self.key,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::directory_db;
    use rstest::{fixture, rstest};

    crate::directory_fixture! {
        fixture_name: populated_db,
    }

    crate::execute_test! {
        test_name: test_show_field_by_name,
        fixture: populated_db,
        cmd: ShowCmd {
            entity: EntityKind::Field,
            key: "Biology".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.record["domain"], "Life Sciences");
            assert_eq!(result.key, "Biology");
        },
    }

    crate::execute_test! {
        test_name: test_show_researcher_by_id,
        fixture: populated_db,
        cmd: ShowCmd {
            entity: EntityKind::Researcher,
            key: "2".to_string(),
        },
        assertions: |result| {
            assert_eq!(result.record["name"], "Rosalind Franklin");
            assert_eq!(result.record["total_star"], "4.80");
        },
    }

    #[rstest]
    fn test_show_missing_record() {
        let db = directory_db();
        let err = ShowCmd {
            entity: EntityKind::Problem,
            key: "Dark Matter".to_string(),
        }
        .execute(db.as_ref())
        .unwrap_err();
        assert_eq!(err.to_string(), "problem Dark Matter not found");
    }

    #[rstest]
    fn test_show_rejects_non_numeric_id() {
        let db = directory_db();
        let result = ShowCmd {
            entity: EntityKind::Message,
            key: "first".to_string(),
        }
        .execute(db.as_ref());
        assert!(result.is_err());
    }
}

//! Persistence for fields, subfields, and problems.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{SchemaRelation, FIELD, PROBLEM, SUBFIELD};
use crate::db::DatabaseBackend;
use crate::models::{Field, Problem, ResearchWork, Subfield, Timestamp};
use crate::validation::{ValidationError, Validator};

use super::record::{list_where, Record};
use super::row::{decimal, text, timestamp, RowReader};
use super::StoreError;

impl Record for Field {
    const RELATION: &'static SchemaRelation = &FIELD;

    fn key(&self) -> DataValue {
        text(&self.name)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            text(&self.name),
            text(&self.domain),
            text(&self.area),
            text(&self.field_type),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Field {
            name: r.string(0)?,
            domain: r.string(1)?,
            area: r.string(2)?,
            field_type: r.string(3)?,
            created_at: r.timestamp(4)?,
            updated_at: r.timestamp(5)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("field")
            .text("name", &self.name, 200)
            .text("domain", &self.domain, 200)
            .text("area", &self.area, 200)
            .text("field_type", &self.field_type, 100)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.domain.cmp(&b.domain).then_with(|| a.name.cmp(&b.name))
    }
}

impl Record for Subfield {
    const RELATION: &'static SchemaRelation = &SUBFIELD;

    fn key(&self) -> DataValue {
        text(&self.name)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            text(&self.name),
            text(&self.field),
            text(&self.field_type),
            text(&self.domain),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Subfield {
            name: r.string(0)?,
            field: r.string(1)?,
            field_type: r.string(2)?,
            domain: r.string(3)?,
            created_at: r.timestamp(4)?,
            updated_at: r.timestamp(5)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("subfield")
            .text("name", &self.name, 200)
            .required("field", &self.field)
            .text("field_type", &self.field_type, 100)
            .text("domain", &self.domain, 200)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.field.cmp(&b.field).then_with(|| a.name.cmp(&b.name))
    }
}

impl Record for Problem {
    const RELATION: &'static SchemaRelation = &PROBLEM;

    fn key(&self) -> DataValue {
        text(&self.name)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            text(&self.name),
            text(&self.subfield),
            text(&self.description),
            text(&self.current_proceedings),
            text(&self.ongoing_work),
            text(&self.done_work),
            text(&self.list_of_researchers_working),
            decimal(&self.funding_reserves),
            text(self.severity.as_str()),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Problem {
            name: r.string(0)?,
            subfield: r.string(1)?,
            description: r.string(2)?,
            current_proceedings: r.string(3)?,
            ongoing_work: r.string(4)?,
            done_work: r.string(5)?,
            list_of_researchers_working: r.string(6)?,
            funding_reserves: r.decimal(7)?,
            severity: r.choice(8)?,
            created_at: r.timestamp(9)?,
            updated_at: r.timestamp(10)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("problem")
            .text("name", &self.name, 200)
            .required("subfield", &self.subfield)
            .required("description", &self.description)
            .required("current_proceedings", &self.current_proceedings)
            .decimal("funding_reserves", &self.funding_reserves, 12, 2)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    /// Most severe first, then by name.
    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| a.name.cmp(&b.name))
    }
}

/// Child subfields of a field, ordered by name.
pub fn subfields_of(db: &dyn DatabaseBackend, field: &str) -> Result<Vec<Subfield>, StoreError> {
    list_where(db, "field", field)
}

/// Problems filed under a subfield.
pub fn problems_of(db: &dyn DatabaseBackend, subfield: &str) -> Result<Vec<Problem>, StoreError> {
    list_where(db, "subfield", subfield)
}

/// The work that solves a problem, if any.
pub fn solved_by(db: &dyn DatabaseBackend, problem: &str) -> Result<Option<ResearchWork>, StoreError> {
    Ok(list_where::<ResearchWork>(db, "solves_problem", problem)?
        .into_iter()
        .next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::store::{create, get, list, require, update};
    use crate::test_utils::setup_store;

    #[test]
    fn test_create_and_get_field() {
        let db = setup_store();
        create(&*db, Field::new("Biology", "Life Sciences", "Biology", "Natural")).unwrap();

        let field: Field = require(&*db, "Biology").unwrap();
        assert_eq!(field.domain, "Life Sciences");
        assert!(get::<Field>(&*db, "Physics").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let db = setup_store();
        create(&*db, Field::new("Biology", "Life", "Bio", "Natural")).unwrap();
        let err = create(&*db, Field::new("Biology", "Other", "Bio", "Natural")).unwrap_err();
        assert!(matches!(err, StoreError::Unique { entity: "field", .. }));
    }

    #[test]
    fn test_field_validation_reports_fields() {
        let db = setup_store();
        let err = create(&*db, Field::new("", "Life", "Bio", &"x".repeat(101))).unwrap_err();
        match err {
            StoreError::Validation(e) => assert_eq!(e.fields(), vec!["name", "field_type"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fields_ordered_by_domain_then_name() {
        let db = setup_store();
        create(&*db, Field::new("Zoology", "Life", "Bio", "Natural")).unwrap();
        create(&*db, Field::new("Optics", "Physical", "Phys", "Natural")).unwrap();
        create(&*db, Field::new("Botany", "Life", "Bio", "Natural")).unwrap();

        let names: Vec<_> = list::<Field>(&*db).unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Botany", "Zoology", "Optics"]);
    }

    #[test]
    fn test_subfield_requires_existing_field() {
        let db = setup_store();
        let err = create(&*db, Subfield::new("Genetics", "Biology", "Natural", "Life")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingReference { field: "field", target: "field", .. }
        ));
    }

    #[test]
    fn test_problems_ordered_by_severity() {
        let db = setup_store();
        create(&*db, Field::new("Biology", "Life", "Bio", "Natural")).unwrap();
        create(&*db, Subfield::new("Genetics", "Biology", "Natural", "Life")).unwrap();
        for (name, severity) in [("A", Severity::Low), ("B", Severity::Critical), ("C", Severity::Medium)] {
            let mut problem = Problem::new(name, "Genetics", "desc", "proc");
            problem.severity = severity;
            create(&*db, problem).unwrap();
        }

        let names: Vec<_> = problems_of(&*db, "Genetics")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let db = setup_store();
        let field = create(&*db, Field::new("Biology", "Life", "Bio", "Natural")).unwrap();
        let created_at = field.created_at;
        let before = field.updated_at;

        let mut changed = field.clone();
        changed.area = "Molecular".to_string();
        std::thread::sleep(std::time::Duration::from_millis(2));
        update(&*db, changed).unwrap();

        let stored: Field = require(&*db, "Biology").unwrap();
        assert_eq!(stored.area, "Molecular");
        assert_eq!(stored.created_at, created_at);
        assert!(stored.updated_at > before);
    }

    #[test]
    fn test_update_missing_record_is_not_found() {
        let db = setup_store();
        let err = update(&*db, Field::new("Ghost", "Life", "Bio", "Natural")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "field", .. }));
    }
}

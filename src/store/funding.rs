//! Persistence for funding institutions and collaborations.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{SchemaRelation, COLLABORATION, FUNDING_INSTITUTION};
use crate::models::{Collaboration, FundingInstitution, Timestamp};
use crate::validation::{ValidationError, Validator};

use super::record::Record;
use super::row::{date, decimal, int, opt_date, text, timestamp, RowReader};

impl Record for FundingInstitution {
    const RELATION: &'static SchemaRelation = &FUNDING_INSTITUTION;

    fn key(&self) -> DataValue {
        int(self.institution_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.institution_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int(self.institution_id),
            text(&self.name),
            text(&self.country),
            decimal(&self.amount),
            decimal(&self.budget),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(FundingInstitution {
            institution_id: r.int(0)?,
            name: r.string(1)?,
            country: r.string(2)?,
            amount: r.decimal(3)?,
            budget: r.decimal(4)?,
            created_at: r.timestamp(5)?,
            updated_at: r.timestamp(6)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("funding_institution")
            .text("name", &self.name, 300)
            .text("country", &self.country, 100)
            .decimal("amount", &self.amount, 15, 2)
            .decimal("budget", &self.budget, 15, 2)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name).then_with(|| a.institution_id.cmp(&b.institution_id))
    }
}

impl Record for Collaboration {
    const RELATION: &'static SchemaRelation = &COLLABORATION;

    fn key(&self) -> DataValue {
        int(self.collaboration_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.collaboration_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int(self.collaboration_id),
            int(self.researcher),
            int(self.funding_institution),
            int(self.research_work),
            date(&self.start_date),
            opt_date(self.end_date.as_ref()),
            decimal(&self.contribution_amount),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Collaboration {
            collaboration_id: r.int(0)?,
            researcher: r.int(1)?,
            funding_institution: r.int(2)?,
            research_work: r.int(3)?,
            start_date: r.date(4)?,
            end_date: r.opt_date(5)?,
            contribution_amount: r.decimal(6)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let dates_in_order = self.end_date.is_none_or(|end| end >= self.start_date);
        Validator::new("collaboration")
            .decimal("contribution_amount", &self.contribution_amount, 12, 2)
            .check("end_date", dates_in_order, "End date must not precede start date")
            .finish()
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.collaboration_id.cmp(&b.collaboration_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::values::parse_decimal;
    use crate::store::{create, list, StoreError};
    use crate::test_utils::{sample_researcher, sample_work, setup_classification};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_institutions_ordered_by_name() {
        let db = setup_classification();
        create(&*db, FundingInstitution::new("Wellcome", "UK")).unwrap();
        create(&*db, FundingInstitution::new("ERC", "EU")).unwrap();
        let names: Vec<_> = list::<FundingInstitution>(&*db)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["ERC", "Wellcome"]);
    }

    #[test]
    fn test_institution_amount_digits() {
        let db = setup_classification();
        let mut inst = FundingInstitution::new("NSF", "US");
        inst.budget = parse_decimal("1234567890123.45").unwrap();
        assert!(create(&*db, inst.clone()).is_ok());

        inst.institution_id = 0;
        inst.amount = parse_decimal("12345678901234.00").unwrap();
        assert!(matches!(create(&*db, inst).unwrap_err(), StoreError::Validation(_)));
    }

    #[test]
    fn test_duplicate_collaboration_triple_rejected() {
        let db = setup_classification();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let nsf = create(&*db, FundingInstitution::new("NSF", "US")).unwrap();
        let work = create(&*db, sample_work("Folding")).unwrap();

        let collab = Collaboration::new(ada.researcher_id, nsf.institution_id, work.work_id, day("2024-01-01"));
        create(&*db, collab.clone()).unwrap();

        let err = create(&*db, collab).unwrap_err();
        match err {
            StoreError::Unique { entity, fields, .. } => {
                assert_eq!(entity, "collaboration");
                assert_eq!(fields, "researcher, funding_institution, research_work");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_end_date_before_start_rejected() {
        let db = setup_classification();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let nsf = create(&*db, FundingInstitution::new("NSF", "US")).unwrap();
        let work = create(&*db, sample_work("Folding")).unwrap();

        let mut collab = Collaboration::new(ada.researcher_id, nsf.institution_id, work.work_id, day("2024-06-01"));
        collab.end_date = Some(day("2024-01-01"));
        match create(&*db, collab).unwrap_err() {
            StoreError::Validation(e) => assert_eq!(e.fields(), vec!["end_date"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_collaboration_requires_all_parents() {
        let db = setup_classification();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let collab = Collaboration::new(ada.researcher_id, 42, 43, day("2024-01-01"));
        let err = create(&*db, collab).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingReference { field: "funding_institution", .. }
        ));
    }
}

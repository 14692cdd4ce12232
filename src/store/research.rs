//! Persistence for researchers and research works.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{SchemaRelation, RESEARCHER, RESEARCH_WORK};
use crate::db::DatabaseBackend;
use crate::models::{ResearchWork, Researcher, Timestamp};
use crate::validation::{ValidationError, Validator};

use super::record::{list_where, Record};
use super::row::{decimal, flag, int, opt_text, text, timestamp, RowReader};
use super::StoreError;

impl Record for Researcher {
    const RELATION: &'static SchemaRelation = &RESEARCHER;

    fn key(&self) -> DataValue {
        int(self.researcher_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.researcher_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int(self.researcher_id),
            text(&self.name),
            text(&self.email),
            text(&self.country),
            text(&self.institution),
            decimal(&self.total_star),
            decimal(&self.peer_rating),
            text(&self.interest),
            opt_text(self.cv.as_deref()),
            text(&self.research_work),
            text(&self.project),
            text(&self.github),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Researcher {
            researcher_id: r.int(0)?,
            name: r.string(1)?,
            email: r.string(2)?,
            country: r.string(3)?,
            institution: r.string(4)?,
            total_star: r.decimal(5)?,
            peer_rating: r.decimal(6)?,
            interest: r.string(7)?,
            cv: r.opt_string(8)?,
            research_work: r.string(9)?,
            project: r.string(10)?,
            github: r.string(11)?,
            created_at: r.timestamp(12)?,
            updated_at: r.timestamp(13)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("researcher")
            .text("name", &self.name, 200)
            .email("email", &self.email)
            .max_length("email", &self.email, 254)
            .text("country", &self.country, 100)
            .text("institution", &self.institution, 300)
            .decimal("total_star", &self.total_star, 5, 2)
            .decimal("peer_rating", &self.peer_rating, 5, 2)
            .required("interest", &self.interest)
            .max_length("cv", self.cv.as_deref().unwrap_or(""), 100)
            .url("github", &self.github)
            .max_length("github", &self.github, 500)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    /// Highest star count first, then by name.
    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.total_star
            .cmp(&a.total_star)
            .then_with(|| a.name.cmp(&b.name))
    }
}

impl Record for ResearchWork {
    const RELATION: &'static SchemaRelation = &RESEARCH_WORK;

    fn key(&self) -> DataValue {
        int(self.work_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.work_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        vec![
            int(self.work_id),
            text(&self.title),
            text(&self.name),
            text(&self.author_name),
            text(&self.publisher),
            int(self.citation),
            text(self.status.as_str()),
            flag(self.vacancy_status),
            text(&self.subfield),
            opt_text(self.solves_problem.as_deref()),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
        ]
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(ResearchWork {
            work_id: r.int(0)?,
            title: r.string(1)?,
            name: r.string(2)?,
            author_name: r.string(3)?,
            publisher: r.string(4)?,
            citation: r.int(5)?,
            status: r.choice(6)?,
            vacancy_status: r.bool(7)?,
            subfield: r.string(8)?,
            solves_problem: r.opt_string(9)?,
            created_at: r.timestamp(10)?,
            updated_at: r.timestamp(11)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new("research_work")
            .text("title", &self.title, 500)
            .text("name", &self.name, 200)
            .text("author_name", &self.author_name, 300)
            .text("publisher", &self.publisher, 200)
            .min("citation", self.citation, 0)
            .required("subfield", &self.subfield)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    /// Most cited first, then by title.
    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.citation
            .cmp(&a.citation)
            .then_with(|| a.title.cmp(&b.title))
    }
}

pub fn works_in_subfield(db: &dyn DatabaseBackend, subfield: &str) -> Result<Vec<ResearchWork>, StoreError> {
    list_where(db, "subfield", subfield)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::values::parse_decimal;
    use crate::models::{Problem, WorkStatus};
    use crate::store::classification::solved_by;
    use crate::store::{create, list, require, update};
    use crate::test_utils::{sample_work, setup_classification, setup_store};

    #[test]
    fn test_researcher_ids_allocated() {
        let db = setup_store();
        let ada = create(&*db, Researcher::new("Ada", "ada@mit.edu", "MIT", "US", "Genomics")).unwrap();
        let bob = create(&*db, Researcher::new("Bob", "bob@mit.edu", "MIT", "US", "Optics")).unwrap();
        assert_eq!(ada.researcher_id, 1);
        assert_eq!(bob.researcher_id, 2);

        let stored: Researcher = require(&*db, 2i64).unwrap();
        assert_eq!(stored.name, "Bob");
        assert!(stored.cv.is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let db = setup_store();
        create(&*db, Researcher::new("Ada", "ada@mit.edu", "MIT", "US", "Genomics")).unwrap();
        let err = create(&*db, Researcher::new("Ada L", "ada@mit.edu", "MIT", "US", "Genomics")).unwrap_err();
        match err {
            StoreError::Unique { entity, fields, .. } => {
                assert_eq!(entity, "researcher");
                assert_eq!(fields, "email");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_update_keeps_own_email() {
        let db = setup_store();
        let mut ada = create(&*db, Researcher::new("Ada", "ada@mit.edu", "MIT", "US", "Genomics")).unwrap();
        ada.country = "UK".to_string();
        update(&*db, ada).unwrap();
        assert_eq!(require::<Researcher>(&*db, 1i64).unwrap().country, "UK");
    }

    #[test]
    fn test_invalid_email_and_github() {
        let db = setup_store();
        let mut ada = Researcher::new("Ada", "not-an-email", "MIT", "US", "Genomics");
        ada.github = "github.com/ada".to_string();
        let err = create(&*db, ada).unwrap_err();
        match err {
            StoreError::Validation(e) => assert_eq!(e.fields(), vec!["email", "github"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_researchers_ordered_by_stars_desc() {
        let db = setup_store();
        let mut low = Researcher::new("Low", "low@x.org", "X", "US", "i");
        low.total_star = parse_decimal("1.50").unwrap();
        let mut high = Researcher::new("High", "high@x.org", "X", "US", "i");
        high.total_star = parse_decimal("4.75").unwrap();
        create(&*db, low).unwrap();
        create(&*db, high).unwrap();

        let names: Vec<_> = list::<Researcher>(&*db).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["High", "Low"]);
    }

    #[test]
    fn test_negative_citation_rejected() {
        let db = setup_classification();
        let mut work = sample_work("Folding");
        work.citation = -1;
        let err = create(&*db, work).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_work_round_trip_and_ordering() {
        let db = setup_classification();
        let mut cited = sample_work("Cited");
        cited.citation = 40;
        cited.status = WorkStatus::Published;
        create(&*db, sample_work("Fresh")).unwrap();
        create(&*db, cited).unwrap();

        let works = works_in_subfield(&*db, "Genetics").unwrap();
        assert_eq!(works[0].title, "Cited");
        assert_eq!(works[0].status, WorkStatus::Published);
        assert_eq!(works[1].title, "Fresh");
    }

    #[test]
    fn test_problem_solved_by_at_most_one_work() {
        let db = setup_classification();
        create(&*db, Problem::new("Aging", "Genetics", "d", "c")).unwrap();

        let mut first = sample_work("First");
        first.solves_problem = Some("Aging".to_string());
        let first = create(&*db, first).unwrap();

        let mut second = sample_work("Second");
        second.solves_problem = Some("Aging".to_string());
        let err = create(&*db, second).unwrap_err();
        assert!(matches!(err, StoreError::Unique { entity: "research_work", .. }));

        let solver = solved_by(&*db, "Aging").unwrap().unwrap();
        assert_eq!(solver.work_id, first.work_id);
    }

    #[test]
    fn test_solving_missing_problem_rejected() {
        let db = setup_classification();
        let mut work = sample_work("Ghost");
        work.solves_problem = Some("Nope".to_string());
        let err = create(&*db, work).unwrap_err();
        assert!(matches!(err, StoreError::MissingReference { target: "problem", .. }));
    }
}

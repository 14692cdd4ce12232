//! Persistence for mentor and co-worker comments.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{SchemaRelation, COWORKER, MENTOR};
use crate::models::{CoWorker, CommentShape, Mentor};
use crate::validation::{ValidationError, Validator};

use super::record::Record;
use super::row::{int, text, timestamp, RowReader};

fn comment_cells(id: i64, comment: &CommentShape) -> Vec<DataValue> {
    vec![
        int(id),
        text(&comment.content),
        int(comment.rating),
        timestamp(&comment.created_at),
    ]
}

fn read_comment(r: &RowReader<'_>) -> Option<CommentShape> {
    Some(CommentShape {
        content: r.string(1)?,
        rating: r.int(2)?,
        created_at: r.timestamp(3)?,
    })
}

fn comment_validator(entity: &'static str, comment: &CommentShape) -> Validator {
    Validator::new(entity)
        .required("content", &comment.content)
        .range("rating", comment.rating, 1, 5)
}

fn newest_first(a: &CommentShape, b: &CommentShape) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

impl Record for Mentor {
    const RELATION: &'static SchemaRelation = &MENTOR;

    fn key(&self) -> DataValue {
        int(self.comment_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.comment_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        let mut row = comment_cells(self.comment_id, &self.comment);
        row.extend([
            int(self.punctual_score),
            int(self.consistency),
            int(self.hard_working),
            int(self.researcher),
            int(self.research_work),
        ]);
        row
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(Mentor {
            comment_id: r.int(0)?,
            comment: read_comment(&r)?,
            punctual_score: r.int(4)?,
            consistency: r.int(5)?,
            hard_working: r.int(6)?,
            researcher: r.int(7)?,
            research_work: r.int(8)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        comment_validator("mentor", &self.comment)
            .range("punctual_score", self.punctual_score, 1, 10)
            .range("consistency", self.consistency, 1, 10)
            .range("hard_working", self.hard_working, 1, 10)
            .finish()
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        newest_first(&a.comment, &b.comment).then_with(|| b.comment_id.cmp(&a.comment_id))
    }
}

impl Record for CoWorker {
    const RELATION: &'static SchemaRelation = &COWORKER;

    fn key(&self) -> DataValue {
        int(self.comment_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.comment_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        let mut row = comment_cells(self.comment_id, &self.comment);
        row.extend([
            text(&self.strength),
            int(self.hard_working),
            int(self.researcher),
            int(self.research_work),
        ]);
        row
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(CoWorker {
            comment_id: r.int(0)?,
            comment: read_comment(&r)?,
            strength: r.string(4)?,
            hard_working: r.int(5)?,
            researcher: r.int(6)?,
            research_work: r.int(7)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        comment_validator("coworker", &self.comment)
            .required("strength", &self.strength)
            .range("hard_working", self.hard_working, 1, 10)
            .finish()
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        newest_first(&a.comment, &b.comment).then_with(|| b.comment_id.cmp(&a.comment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::store::{create, require, StoreError};
    use crate::test_utils::{sample_researcher, sample_work, setup_classification};

    #[rstest]
    #[case(0, 5, Some("rating"))]
    #[case(6, 5, Some("rating"))]
    #[case(3, 0, Some("punctual_score"))]
    #[case(3, 11, Some("punctual_score"))]
    #[case(1, 10, None)]
    #[case(5, 1, None)]
    fn test_mentor_ranges(#[case] rating: i64, #[case] punctual: i64, #[case] bad_field: Option<&str>) {
        let db = setup_classification();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let work = create(&*db, sample_work("Folding")).unwrap();

        let mut mentor = Mentor::new("Great", ada.researcher_id, work.work_id);
        mentor.comment.rating = rating;
        mentor.punctual_score = punctual;

        match (create(&*db, mentor), bad_field) {
            (Ok(_), None) => {}
            (Err(StoreError::Validation(e)), Some(field)) => assert_eq!(e.fields(), vec![field]),
            (other, expected) => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    fn test_coworker_hard_working_range(#[case] hard_working: i64) {
        let db = setup_classification();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let work = create(&*db, sample_work("Folding")).unwrap();

        let mut coworker = CoWorker::new("Solid", "Lab work", ada.researcher_id, work.work_id);
        coworker.hard_working = hard_working;
        assert!(matches!(create(&*db, coworker), Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_coworker_round_trip() {
        let db = setup_classification();
        let ada = create(&*db, sample_researcher("Ada")).unwrap();
        let work = create(&*db, sample_work("Folding")).unwrap();
        let created = create(&*db, CoWorker::new("Solid", "Lab work", ada.researcher_id, work.work_id)).unwrap();

        let stored: CoWorker = require(&*db, created.comment_id).unwrap();
        assert_eq!(stored.strength, "Lab work");
        assert_eq!(stored.comment.rating, 3);
        assert_eq!(stored.hard_working, 5);
    }
}

//! Persistence for the post family: project collaborations, queries, and
//! funding proposals. The shared post columns come first in each relation.

use std::cmp::Ordering;

use cozo::DataValue;

use crate::db::schema::{SchemaRelation, FUNDING_PROPOSAL, PROJECT_COLAB, QUERY_POST};
use crate::db::DatabaseBackend;
use crate::models::{FundingProposal, PostShape, ProjectColab, QueryPost, Timestamp};
use crate::validation::{ValidationError, Validator};

use super::record::{list_where, Record};
use super::row::{decimal, flag, int, opt_int, text, timestamp, RowReader};
use super::StoreError;

fn post_cells(id: i64, post: &PostShape) -> Vec<DataValue> {
    vec![
        int(id),
        text(&post.title),
        text(&post.content),
        timestamp(&post.created_at),
        timestamp(&post.updated_at),
    ]
}

fn read_post(r: &RowReader<'_>) -> Option<PostShape> {
    Some(PostShape {
        title: r.string(1)?,
        content: r.string(2)?,
        created_at: r.timestamp(3)?,
        updated_at: r.timestamp(4)?,
    })
}

fn post_validator(entity: &'static str, post: &PostShape) -> Validator {
    Validator::new(entity)
        .text("title", &post.title, 300)
        .required("content", &post.content)
}

/// Newest first.
fn newest_first(a: &PostShape, b: &PostShape) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

impl Record for ProjectColab {
    const RELATION: &'static SchemaRelation = &PROJECT_COLAB;

    fn key(&self) -> DataValue {
        int(self.post_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.post_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        let mut row = post_cells(self.post_id, &self.post);
        row.extend([
            text(&self.project_name),
            text(&self.required_skills),
            text(&self.duration),
            int(self.posted_by),
        ]);
        row
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(ProjectColab {
            post_id: r.int(0)?,
            post: read_post(&r)?,
            project_name: r.string(5)?,
            required_skills: r.string(6)?,
            duration: r.string(7)?,
            posted_by: r.int(8)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        post_validator("project_colab", &self.post)
            .text("project_name", &self.project_name, 200)
            .required("required_skills", &self.required_skills)
            .text("duration", &self.duration, 100)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.post.updated_at = now;
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        newest_first(&a.post, &b.post).then_with(|| b.post_id.cmp(&a.post_id))
    }
}

impl Record for QueryPost {
    const RELATION: &'static SchemaRelation = &QUERY_POST;

    fn key(&self) -> DataValue {
        int(self.post_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.post_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        let mut row = post_cells(self.post_id, &self.post);
        row.extend([
            text(self.query_type.as_str()),
            flag(self.is_answered),
            int(self.posted_by),
        ]);
        row
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(QueryPost {
            post_id: r.int(0)?,
            post: read_post(&r)?,
            query_type: r.choice(5)?,
            is_answered: r.bool(6)?,
            posted_by: r.int(7)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        post_validator("query_post", &self.post).finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.post.updated_at = now;
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        newest_first(&a.post, &b.post).then_with(|| b.post_id.cmp(&a.post_id))
    }
}

impl Record for FundingProposal {
    const RELATION: &'static SchemaRelation = &FUNDING_PROPOSAL;

    fn key(&self) -> DataValue {
        int(self.post_id)
    }

    fn auto_id(&mut self) -> Option<&mut i64> {
        Some(&mut self.post_id)
    }

    fn to_row(&self) -> Vec<DataValue> {
        let mut row = post_cells(self.post_id, &self.post);
        row.extend([
            decimal(&self.requested_amount),
            text(self.proposal_status.as_str()),
            int(self.posted_by),
            int(self.funding_institution),
            opt_int(self.research_work),
        ]);
        row
    }

    fn from_row(row: &[DataValue]) -> Option<Self> {
        let r = RowReader::new(row);
        Some(FundingProposal {
            post_id: r.int(0)?,
            post: read_post(&r)?,
            requested_amount: r.decimal(5)?,
            proposal_status: r.choice(6)?,
            posted_by: r.int(7)?,
            funding_institution: r.int(8)?,
            research_work: r.opt_int(9)?,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        post_validator("funding_proposal", &self.post)
            .decimal("requested_amount", &self.requested_amount, 12, 2)
            .finish()
    }

    fn touch(&mut self, now: Timestamp) {
        self.post.updated_at = now;
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        newest_first(&a.post, &b.post).then_with(|| b.post_id.cmp(&a.post_id))
    }
}

pub fn proposals_for_institution(
    db: &dyn DatabaseBackend,
    institution_id: i64,
) -> Result<Vec<FundingProposal>, StoreError> {
    list_where(db, "funding_institution", institution_id)
}

//! Admin-style entity listings.
//!
//! Each entity kind declares its display columns and search fields. Related
//! records are shown by name and counted per row. Unlike the field search, an
//! empty search lists every row.

use std::collections::HashMap;
use std::error::Error;

use serde::Serialize;

use crate::db::{extract_i64, run_query_no_params, DatabaseBackend};
use crate::models::values::{format_date, format_decimal};
use crate::models::{
    CoWorker, Collaboration, Conversation, Field, FundingInstitution, FundingProposal, Mentor, Message,
    Problem, ProjectColab, QueryPost, ResearchWork, Researcher, Subfield, Timestamp,
};
use crate::store::row::display_key;
use crate::store::{list, EntityKind};

/// Characters of a message body shown in a listing.
pub const PREVIEW_LEN: usize = 50;

/// One listed record.
#[derive(Debug, Clone, Serialize)]
pub struct ListingRow {
    pub key: String,
    pub cells: Vec<String>,
    #[serde(skip)]
    haystack: Vec<String>,
}

impl ListingRow {
    fn new(key: impl ToString, cells: Vec<String>, haystack: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            cells,
            haystack,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.haystack.iter().any(|value| value.to_lowercase().contains(needle))
    }
}

/// Rows of one entity kind, filtered and limited.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub entity: EntityKind,
    pub search: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<ListingRow>,
    /// Matching rows before the limit
    pub total: usize,
}

impl Listing {
    /// Cell of `column` in row `idx`.
    pub fn cell(&self, idx: usize, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| *c == column)?;
        self.rows.get(idx)?.cells.get(col).map(String::as_str)
    }
}

/// Columns shown for each kind.
pub fn columns(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Field => vec!["name", "domain", "area", "field_type", "subfields"],
        EntityKind::Subfield => vec!["name", "field", "field_type", "domain", "problems"],
        EntityKind::Problem => vec!["name", "subfield", "priority", "funding_reserves", "solved"],
        EntityKind::Researcher => {
            vec!["name", "email", "institution", "country", "total_star", "expert_fields", "friends"]
        }
        EntityKind::ResearchWork => {
            vec!["title", "author_name", "status", "citation", "vacancy_status", "researchers"]
        }
        EntityKind::FundingInstitution => vec!["name", "country", "amount", "budget", "proposals"],
        EntityKind::ProjectColab => vec!["project_name", "posted_by", "duration", "created_at"],
        EntityKind::QueryPost => {
            vec!["title", "posted_by", "query_type", "is_answered", "feedback", "created_at"]
        }
        EntityKind::FundingProposal => vec![
            "title",
            "posted_by",
            "funding_institution",
            "requested_amount",
            "proposal_status",
            "created_at",
        ],
        EntityKind::Conversation => {
            vec!["conversation_id", "title", "participants", "messages", "updated_at"]
        }
        EntityKind::Message => {
            vec!["message_id", "sender", "receiver", "conversation", "time_date", "preview"]
        }
        EntityKind::Mentor => vec![
            "researcher",
            "research_work",
            "rating",
            "punctual_score",
            "consistency",
            "hard_working",
            "created_at",
        ],
        EntityKind::Coworker => vec!["researcher", "research_work", "rating", "hard_working", "created_at"],
        EntityKind::Collaboration => vec![
            "researcher",
            "funding_institution",
            "research_work",
            "contribution_amount",
            "start_date",
            "end_date",
        ],
    }
}

/// List `kind`, keeping rows whose search fields contain `search`
/// (case-insensitive), and at most `limit` of them.
pub fn list_entities(
    db: &dyn DatabaseBackend,
    kind: EntityKind,
    search: &str,
    limit: Option<usize>,
) -> Result<Listing, Box<dyn Error>> {
    let mut rows = build_rows(db, kind)?;

    let needle = search.trim().to_lowercase();
    if !needle.is_empty() {
        rows.retain(|row| row.matches(&needle));
    }
    let total = rows.len();
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    tracing::debug!(entity = kind.name(), search, total, "listing");
    Ok(Listing {
        entity: kind,
        search: search.to_string(),
        columns: columns(kind),
        rows,
        total,
    })
}

/// Names of referenced records, loaded once per listing.
struct Names {
    researchers: HashMap<i64, String>,
    works: HashMap<i64, String>,
    institutions: HashMap<i64, String>,
}

impl Names {
    fn load(db: &dyn DatabaseBackend) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            researchers: list::<Researcher>(db)?
                .into_iter()
                .map(|r| (r.researcher_id, r.name))
                .collect(),
            works: list::<ResearchWork>(db)?.into_iter().map(|w| (w.work_id, w.title)).collect(),
            institutions: list::<FundingInstitution>(db)?
                .into_iter()
                .map(|i| (i.institution_id, i.name))
                .collect(),
        })
    }

    fn researcher(&self, id: i64) -> String {
        lookup(&self.researchers, id)
    }

    fn work(&self, id: i64) -> String {
        lookup(&self.works, id)
    }

    fn institution(&self, id: i64) -> String {
        lookup(&self.institutions, id)
    }
}

fn lookup(names: &HashMap<i64, String>, id: i64) -> String {
    names.get(&id).cloned().unwrap_or_else(|| format!("#{}", id))
}

/// Row counts of `relation` grouped by `column`, keyed by the display form
/// of the column value.
fn count_by(
    db: &dyn DatabaseBackend,
    relation: &str,
    column: &str,
    counted: &str,
) -> Result<HashMap<String, usize>, Box<dyn Error>> {
    let script = format!(
        "?[{col}, count({counted})] := *{rel}{{{col}, {counted}}}",
        col = column,
        counted = counted,
        rel = relation,
    );
    let result = run_query_no_params(db, &script)?;
    Ok(result
        .rows
        .iter()
        .filter_map(|row| {
            let key = display_key(row.first()?);
            let count = extract_i64(row.get(1)?)?;
            Some((key, count as usize))
        })
        .collect())
}

fn count_of(counts: &HashMap<String, usize>, key: impl ToString) -> String {
    counts.get(&key.to_string()).copied().unwrap_or(0).to_string()
}

fn when(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

/// First `PREVIEW_LEN` characters, with an ellipsis when cut.
pub fn preview(body: &str) -> String {
    if body.chars().count() > PREVIEW_LEN {
        let cut: String = body.chars().take(PREVIEW_LEN).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

fn build_rows(db: &dyn DatabaseBackend, kind: EntityKind) -> Result<Vec<ListingRow>, Box<dyn Error>> {
    let rows = match kind {
        EntityKind::Field => {
            let subfields = count_by(db, "subfield", "field", "name")?;
            list::<Field>(db)?
                .into_iter()
                .map(|f| {
                    let cells = vec![
                        f.name.clone(),
                        f.domain.clone(),
                        f.area.clone(),
                        f.field_type.clone(),
                        count_of(&subfields, &f.name),
                    ];
                    ListingRow::new(&f.name, cells, vec![f.name.clone(), f.domain, f.area])
                })
                .collect()
        }
        EntityKind::Subfield => {
            let problems = count_by(db, "problem", "subfield", "name")?;
            list::<Subfield>(db)?
                .into_iter()
                .map(|s| {
                    let cells = vec![
                        s.name.clone(),
                        s.field.clone(),
                        s.field_type.clone(),
                        s.domain.clone(),
                        count_of(&problems, &s.name),
                    ];
                    ListingRow::new(&s.name, cells, vec![s.name.clone(), s.field])
                })
                .collect()
        }
        EntityKind::Problem => {
            let solved = count_by(db, "research_work", "solves_problem", "work_id")?;
            list::<Problem>(db)?
                .into_iter()
                .map(|p| {
                    let cells = vec![
                        p.name.clone(),
                        p.subfield.clone(),
                        p.severity.label().to_string(),
                        format_decimal(&p.funding_reserves),
                        yes_no(solved.contains_key(&p.name)),
                    ];
                    ListingRow::new(&p.name, cells, vec![p.name.clone(), p.description])
                })
                .collect()
        }
        EntityKind::Researcher => {
            let experts = count_by(db, "researcher_expertise", "researcher_id", "field")?;
            let low = count_by(db, "researcher_friend", "low", "high")?;
            let high = count_by(db, "researcher_friend", "high", "low")?;
            list::<Researcher>(db)?
                .into_iter()
                .map(|r| {
                    let id = r.researcher_id.to_string();
                    let friends = low.get(&id).copied().unwrap_or(0) + high.get(&id).copied().unwrap_or(0);
                    let cells = vec![
                        r.name.clone(),
                        r.email.clone(),
                        r.institution.clone(),
                        r.country.clone(),
                        format_decimal(&r.total_star),
                        count_of(&experts, &id),
                        friends.to_string(),
                    ];
                    ListingRow::new(&id, cells, vec![r.name, r.email, r.institution])
                })
                .collect()
        }
        EntityKind::ResearchWork => {
            let authors = count_by(db, "work_author", "work_id", "researcher_id")?;
            list::<ResearchWork>(db)?
                .into_iter()
                .map(|w| {
                    let cells = vec![
                        w.title.clone(),
                        w.author_name.clone(),
                        w.status.label().to_string(),
                        w.citation.to_string(),
                        yes_no(w.vacancy_status),
                        count_of(&authors, w.work_id),
                    ];
                    ListingRow::new(w.work_id, cells, vec![w.title, w.author_name, w.name])
                })
                .collect()
        }
        EntityKind::FundingInstitution => {
            let proposals = count_by(db, "funding_proposal", "funding_institution", "post_id")?;
            list::<FundingInstitution>(db)?
                .into_iter()
                .map(|i| {
                    let cells = vec![
                        i.name.clone(),
                        i.country.clone(),
                        format_decimal(&i.amount),
                        format_decimal(&i.budget),
                        count_of(&proposals, i.institution_id),
                    ];
                    ListingRow::new(i.institution_id, cells, vec![i.name, i.country])
                })
                .collect()
        }
        EntityKind::ProjectColab => {
            let names = Names::load(db)?;
            list::<ProjectColab>(db)?
                .into_iter()
                .map(|p| {
                    let poster = names.researcher(p.posted_by);
                    let cells = vec![
                        p.project_name.clone(),
                        poster.clone(),
                        p.duration.clone(),
                        when(&p.post.created_at),
                    ];
                    ListingRow::new(p.post_id, cells, vec![p.project_name, p.post.title, poster])
                })
                .collect()
        }
        EntityKind::QueryPost => {
            let names = Names::load(db)?;
            let feedback = count_by(db, "query_feedback", "post_id", "researcher_id")?;
            list::<QueryPost>(db)?
                .into_iter()
                .map(|q| {
                    let poster = names.researcher(q.posted_by);
                    let cells = vec![
                        q.post.title.clone(),
                        poster.clone(),
                        q.query_type.label().to_string(),
                        yes_no(q.is_answered),
                        count_of(&feedback, q.post_id),
                        when(&q.post.created_at),
                    ];
                    ListingRow::new(q.post_id, cells, vec![q.post.title, q.post.content, poster])
                })
                .collect()
        }
        EntityKind::FundingProposal => {
            let names = Names::load(db)?;
            list::<FundingProposal>(db)?
                .into_iter()
                .map(|p| {
                    let poster = names.researcher(p.posted_by);
                    let cells = vec![
                        p.post.title.clone(),
                        poster.clone(),
                        names.institution(p.funding_institution),
                        format_decimal(&p.requested_amount),
                        p.proposal_status.label().to_string(),
                        when(&p.post.created_at),
                    ];
                    ListingRow::new(p.post_id, cells, vec![p.post.title, poster])
                })
                .collect()
        }
        EntityKind::Conversation => {
            let participants = count_by(db, "conversation_participant", "conversation_id", "researcher_id")?;
            let messages = count_by(db, "message", "conversation", "message_id")?;
            list::<Conversation>(db)?
                .into_iter()
                .map(|c| {
                    let cells = vec![
                        c.conversation_id.to_string(),
                        c.title.clone(),
                        count_of(&participants, c.conversation_id),
                        count_of(&messages, c.conversation_id),
                        when(&c.updated_at),
                    ];
                    ListingRow::new(c.conversation_id, cells, vec![c.title])
                })
                .collect()
        }
        EntityKind::Message => {
            let names = Names::load(db)?;
            list::<Message>(db)?
                .into_iter()
                .map(|m| {
                    let sender = names.researcher(m.sender);
                    let receiver = names.researcher(m.receiver);
                    let cells = vec![
                        m.message_id.to_string(),
                        sender.clone(),
                        receiver.clone(),
                        format!("Conversation #{}", m.conversation),
                        when(&m.time_date),
                        preview(&m.body),
                    ];
                    ListingRow::new(m.message_id, cells, vec![m.body, sender, receiver])
                })
                .collect()
        }
        EntityKind::Mentor => {
            let names = Names::load(db)?;
            list::<Mentor>(db)?
                .into_iter()
                .map(|m| {
                    let researcher = names.researcher(m.researcher);
                    let work = names.work(m.research_work);
                    let cells = vec![
                        researcher.clone(),
                        work.clone(),
                        m.comment.rating.to_string(),
                        m.punctual_score.to_string(),
                        m.consistency.to_string(),
                        m.hard_working.to_string(),
                        when(&m.comment.created_at),
                    ];
                    ListingRow::new(m.comment_id, cells, vec![researcher, work, m.comment.content])
                })
                .collect()
        }
        EntityKind::Coworker => {
            let names = Names::load(db)?;
            list::<CoWorker>(db)?
                .into_iter()
                .map(|c| {
                    let researcher = names.researcher(c.researcher);
                    let work = names.work(c.research_work);
                    let cells = vec![
                        researcher.clone(),
                        work.clone(),
                        c.comment.rating.to_string(),
                        c.hard_working.to_string(),
                        when(&c.comment.created_at),
                    ];
                    ListingRow::new(c.comment_id, cells, vec![researcher, work, c.comment.content, c.strength])
                })
                .collect()
        }
        EntityKind::Collaboration => {
            let names = Names::load(db)?;
            list::<Collaboration>(db)?
                .into_iter()
                .map(|c| {
                    let researcher = names.researcher(c.researcher);
                    let institution = names.institution(c.funding_institution);
                    let work = names.work(c.research_work);
                    let cells = vec![
                        researcher.clone(),
                        institution.clone(),
                        work.clone(),
                        format_decimal(&c.contribution_amount),
                        format_date(&c.start_date),
                        c.end_date.as_ref().map(format_date).unwrap_or_default(),
                    ];
                    ListingRow::new(c.collaboration_id, cells, vec![researcher, institution, work])
                })
                .collect()
        }
    };
    Ok(rows)
}

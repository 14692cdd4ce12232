//! All database relation definitions.
//!
//! One relation per concrete entity, five link relations for the
//! many-to-many edges, and `sequence` for id allocation. Column order here is
//! the row order used by every `:put` and every fetch.

use super::definition::{DataType, SchemaField, SchemaRelation, SchemaRelationship};

const fn text(name: &'static str) -> SchemaField {
    SchemaField::new(name, DataType::String)
}

const fn int(name: &'static str) -> SchemaField {
    SchemaField::new(name, DataType::Int)
}

const fn flag(name: &'static str) -> SchemaField {
    SchemaField::new(name, DataType::Bool)
}

const fn opt_text(name: &'static str) -> SchemaField {
    SchemaField::nullable(name, DataType::String)
}

const fn opt_int(name: &'static str) -> SchemaField {
    SchemaField::nullable(name, DataType::Int)
}

const fn cascade(column: &'static str, target: &'static str) -> SchemaRelationship {
    SchemaRelationship::cascade(column, target)
}

/// Research fields, the top of the classification.
pub const FIELD: SchemaRelation = SchemaRelation {
    name: "field",
    key_fields: &[text("name")],
    value_fields: &[
        text("domain"),
        text("area"),
        text("field_type"),
        text("created_at"),
        text("updated_at"),
    ],
    relationships: &[],
    unique: &[],
};

pub const SUBFIELD: SchemaRelation = SchemaRelation {
    name: "subfield",
    key_fields: &[text("name")],
    value_fields: &[
        text("field"),
        text("field_type"),
        text("domain"),
        text("created_at"),
        text("updated_at"),
    ],
    relationships: &[cascade("field", "field")],
    unique: &[],
};

/// Open research problems. `funding_reserves` is a decimal string.
pub const PROBLEM: SchemaRelation = SchemaRelation {
    name: "problem",
    key_fields: &[text("name")],
    value_fields: &[
        text("subfield"),
        text("description"),
        text("current_proceedings"),
        text("ongoing_work"),
        text("done_work"),
        text("list_of_researchers_working"),
        text("funding_reserves"),
        text("severity"),
        text("created_at"),
        text("updated_at"),
    ],
    relationships: &[cascade("subfield", "subfield")],
    unique: &[],
};

pub const RESEARCHER: SchemaRelation = SchemaRelation {
    name: "researcher",
    key_fields: &[int("researcher_id")],
    value_fields: &[
        text("name"),
        text("email"),
        text("country"),
        text("institution"),
        text("total_star"),
        text("peer_rating"),
        text("interest"),
        opt_text("cv"),
        text("research_work"),
        text("project"),
        text("github"),
        text("created_at"),
        text("updated_at"),
    ],
    relationships: &[],
    unique: &[&["email"]],
};

/// Published or in-progress works. A work solves at most one problem and a
/// problem is solved by at most one work.
pub const RESEARCH_WORK: SchemaRelation = SchemaRelation {
    name: "research_work",
    key_fields: &[int("work_id")],
    value_fields: &[
        text("title"),
        text("name"),
        text("author_name"),
        text("publisher"),
        int("citation"),
        text("status"),
        flag("vacancy_status"),
        text("subfield"),
        opt_text("solves_problem"),
        text("created_at"),
        text("updated_at"),
    ],
    relationships: &[
        cascade("subfield", "subfield"),
        SchemaRelationship::set_null("solves_problem", "problem"),
    ],
    unique: &[&["solves_problem"]],
};

pub const FUNDING_INSTITUTION: SchemaRelation = SchemaRelation {
    name: "funding_institution",
    key_fields: &[int("institution_id")],
    value_fields: &[
        text("name"),
        text("country"),
        text("amount"),
        text("budget"),
        text("created_at"),
        text("updated_at"),
    ],
    relationships: &[],
    unique: &[],
};

pub const PROJECT_COLAB: SchemaRelation = SchemaRelation {
    name: "project_colab",
    key_fields: &[int("post_id")],
    value_fields: &[
        text("title"),
        text("content"),
        text("created_at"),
        text("updated_at"),
        text("project_name"),
        text("required_skills"),
        text("duration"),
        int("posted_by"),
    ],
    relationships: &[cascade("posted_by", "researcher")],
    unique: &[],
};

pub const QUERY_POST: SchemaRelation = SchemaRelation {
    name: "query_post",
    key_fields: &[int("post_id")],
    value_fields: &[
        text("title"),
        text("content"),
        text("created_at"),
        text("updated_at"),
        text("query_type"),
        flag("is_answered"),
        int("posted_by"),
    ],
    relationships: &[cascade("posted_by", "researcher")],
    unique: &[],
};

pub const FUNDING_PROPOSAL: SchemaRelation = SchemaRelation {
    name: "funding_proposal",
    key_fields: &[int("post_id")],
    value_fields: &[
        text("title"),
        text("content"),
        text("created_at"),
        text("updated_at"),
        text("requested_amount"),
        text("proposal_status"),
        int("posted_by"),
        int("funding_institution"),
        opt_int("research_work"),
    ],
    relationships: &[
        cascade("posted_by", "researcher"),
        cascade("funding_institution", "funding_institution"),
        cascade("research_work", "research_work"),
    ],
    unique: &[],
};

pub const CONVERSATION: SchemaRelation = SchemaRelation {
    name: "conversation",
    key_fields: &[int("conversation_id")],
    value_fields: &[text("title"), text("created_at"), text("updated_at")],
    relationships: &[],
    unique: &[],
};

pub const MESSAGE: SchemaRelation = SchemaRelation {
    name: "message",
    key_fields: &[int("message_id")],
    value_fields: &[
        text("body"),
        text("time_date"),
        int("sender"),
        int("receiver"),
        int("conversation"),
    ],
    relationships: &[
        cascade("sender", "researcher"),
        cascade("receiver", "researcher"),
        cascade("conversation", "conversation"),
    ],
    unique: &[],
};

pub const MENTOR: SchemaRelation = SchemaRelation {
    name: "mentor",
    key_fields: &[int("comment_id")],
    value_fields: &[
        text("content"),
        int("rating"),
        text("created_at"),
        int("punctual_score"),
        int("consistency"),
        int("hard_working"),
        int("researcher"),
        int("research_work"),
    ],
    relationships: &[
        cascade("researcher", "researcher"),
        cascade("research_work", "research_work"),
    ],
    unique: &[],
};

pub const COWORKER: SchemaRelation = SchemaRelation {
    name: "coworker",
    key_fields: &[int("comment_id")],
    value_fields: &[
        text("content"),
        int("rating"),
        text("created_at"),
        text("strength"),
        int("hard_working"),
        int("researcher"),
        int("research_work"),
    ],
    relationships: &[
        cascade("researcher", "researcher"),
        cascade("research_work", "research_work"),
    ],
    unique: &[],
};

/// Ternary join of researcher, institution, and work.
pub const COLLABORATION: SchemaRelation = SchemaRelation {
    name: "collaboration",
    key_fields: &[int("collaboration_id")],
    value_fields: &[
        int("researcher"),
        int("funding_institution"),
        int("research_work"),
        text("start_date"),
        opt_text("end_date"),
        text("contribution_amount"),
    ],
    relationships: &[
        cascade("researcher", "researcher"),
        cascade("funding_institution", "funding_institution"),
        cascade("research_work", "research_work"),
    ],
    unique: &[&["researcher", "funding_institution", "research_work"]],
};

/// Researcher ↔ Field expertise.
pub const RESEARCHER_EXPERTISE: SchemaRelation = SchemaRelation {
    name: "researcher_expertise",
    key_fields: &[int("researcher_id"), text("field")],
    value_fields: &[],
    relationships: &[cascade("researcher_id", "researcher"), cascade("field", "field")],
    unique: &[],
};

/// Symmetric friendship, stored once with `low < high`.
pub const RESEARCHER_FRIEND: SchemaRelation = SchemaRelation {
    name: "researcher_friend",
    key_fields: &[int("low"), int("high")],
    value_fields: &[],
    relationships: &[cascade("low", "researcher"), cascade("high", "researcher")],
    unique: &[],
};

pub const WORK_AUTHOR: SchemaRelation = SchemaRelation {
    name: "work_author",
    key_fields: &[int("work_id"), int("researcher_id")],
    value_fields: &[],
    relationships: &[
        cascade("work_id", "research_work"),
        cascade("researcher_id", "researcher"),
    ],
    unique: &[],
};

pub const CONVERSATION_PARTICIPANT: SchemaRelation = SchemaRelation {
    name: "conversation_participant",
    key_fields: &[int("conversation_id"), int("researcher_id")],
    value_fields: &[],
    relationships: &[
        cascade("conversation_id", "conversation"),
        cascade("researcher_id", "researcher"),
    ],
    unique: &[],
};

/// Researchers who gave feedback on a query post.
pub const QUERY_FEEDBACK: SchemaRelation = SchemaRelation {
    name: "query_feedback",
    key_fields: &[int("post_id"), int("researcher_id")],
    value_fields: &[],
    relationships: &[
        cascade("post_id", "query_post"),
        cascade("researcher_id", "researcher"),
    ],
    unique: &[],
};

/// Next id to hand out, per relation name.
pub const SEQUENCE: SchemaRelation = SchemaRelation {
    name: "sequence",
    key_fields: &[text("name")],
    value_fields: &[int("next")],
    relationships: &[],
    unique: &[],
};

/// Every relation, parents before children.
pub const ALL_RELATIONS: &[&SchemaRelation] = &[
    &FIELD,
    &SUBFIELD,
    &PROBLEM,
    &RESEARCHER,
    &RESEARCH_WORK,
    &FUNDING_INSTITUTION,
    &PROJECT_COLAB,
    &QUERY_POST,
    &FUNDING_PROPOSAL,
    &CONVERSATION,
    &MESSAGE,
    &MENTOR,
    &COWORKER,
    &COLLABORATION,
    &RESEARCHER_EXPERTISE,
    &RESEARCHER_FRIEND,
    &WORK_AUTHOR,
    &CONVERSATION_PARTICIPANT,
    &QUERY_FEEDBACK,
    &SEQUENCE,
];

/// Look up a relation by name.
pub fn relation_by_name(name: &str) -> Option<&'static SchemaRelation> {
    ALL_RELATIONS.iter().copied().find(|r| r.name == name)
}

//! Serde models for the directory JSON dump.
//!
//! Entities use the model types directly. Cross references are by key, so
//! dumps carry explicit ids for every entity another record points at.

use serde::Deserialize;

use crate::models::{
    CoWorker, Collaboration, Conversation, Field, FundingInstitution, FundingProposal, Mentor, Message,
    Problem, ProjectColab, QueryPost, ResearchWork, Researcher, Subfield,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DirectoryDump {
    pub fields: Vec<Field>,
    pub subfields: Vec<Subfield>,
    pub problems: Vec<Problem>,
    pub researchers: Vec<Researcher>,
    pub research_works: Vec<ResearchWork>,
    pub funding_institutions: Vec<FundingInstitution>,
    pub project_colabs: Vec<ProjectColab>,
    pub query_posts: Vec<QueryPost>,
    pub funding_proposals: Vec<FundingProposal>,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
    pub mentors: Vec<Mentor>,
    pub coworkers: Vec<CoWorker>,
    pub collaborations: Vec<Collaboration>,
    pub links: LinkDump,
}

/// Rows of the many-to-many link relations.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LinkDump {
    pub expertise: Vec<ExpertiseLink>,
    pub friends: Vec<FriendLink>,
    pub authors: Vec<AuthorLink>,
    pub participants: Vec<ParticipantLink>,
    pub feedback: Vec<FeedbackLink>,
}

#[derive(Debug, Deserialize)]
pub struct ExpertiseLink {
    pub researcher_id: i64,
    pub field: String,
}

/// Order does not matter; the pair is stored once.
#[derive(Debug, Deserialize)]
pub struct FriendLink {
    pub researcher: i64,
    pub friend: i64,
}

#[derive(Debug, Deserialize)]
pub struct AuthorLink {
    pub work_id: i64,
    pub researcher_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantLink {
    pub conversation_id: i64,
    pub researcher_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackLink {
    pub post_id: i64,
    pub researcher_id: i64,
}

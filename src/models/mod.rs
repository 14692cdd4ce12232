//! Directory entity types.
//!
//! Plain serde structs, one per concrete entity. Foreign keys are held as the
//! parent's key (a name for the classification entities, an id otherwise);
//! persistence lives in `crate::store`.

mod choices;
mod classification;
mod comments;
mod funding;
mod messaging;
mod posts;
mod research;
mod shapes;
pub mod values;

pub use choices::{ChoiceError, ProposalStatus, QueryType, Severity, WorkStatus};
pub use classification::{Field, Problem, Subfield};
pub use comments::{CoWorker, Mentor};
pub use funding::{Collaboration, FundingInstitution, FundingProposal};
pub use messaging::{Conversation, Message};
pub use posts::{ProjectColab, QueryPost};
pub use research::{ResearchWork, Researcher};
pub use shapes::{CommentShape, PostShape};
pub use values::Timestamp;

pub mod aid_item;
pub mod leader;
pub mod opportunity;
pub mod peer_answer;
pub mod submission;

pub use aid_item::{AidItem, AidItemStatus};
pub use leader::LeaderEntry;
pub use opportunity::{Opportunity, OpportunityKind};
pub use peer_answer::{AiExchange, PeerAnswer};
pub use submission::Submission;

mod issue;
mod member;
mod severity;
mod state;

pub use issue::{Issue, NewIssue};
pub use member::{MemberId, Responsible, UNASSIGNED};
pub use severity::Severity;
pub use state::{IssueState, OpenStates};

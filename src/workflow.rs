//! Issue workflow: the named transitions and the states they connect.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PoiError, Result};
use crate::types::{Issue, IssueState};

/// Read access to an issue's workflow state.
///
/// Queries only need this, never the transition graph.
pub trait StateReader {
    fn current_state(&self, issue: &Issue) -> IssueState;
}

/// Named workflow edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    AcceptUnconfirmed,
    RejectUnconfirmed,
    PostponeUnconfirmed,
    Begin,
    Resolve,
    Postpone,
    AcceptDeferred,
    Close,
    Reopen,
}

impl Transition {
    pub const ALL: [Transition; 9] = [
        Transition::AcceptUnconfirmed,
        Transition::RejectUnconfirmed,
        Transition::PostponeUnconfirmed,
        Transition::Begin,
        Transition::Resolve,
        Transition::Postpone,
        Transition::AcceptDeferred,
        Transition::Close,
        Transition::Reopen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Transition::AcceptUnconfirmed => "accept-unconfirmed",
            Transition::RejectUnconfirmed => "reject-unconfirmed",
            Transition::PostponeUnconfirmed => "postpone-unconfirmed",
            Transition::Begin => "begin",
            Transition::Resolve => "resolve",
            Transition::Postpone => "postpone",
            Transition::AcceptDeferred => "accept-deferred",
            Transition::Close => "close",
            Transition::Reopen => "reopen",
        }
    }

    /// Target state when fired from `from`, or `None` if the edge does not exist.
    pub fn apply(self, from: IssueState) -> Option<IssueState> {
        use IssueState::*;

        match (self, from) {
            (Transition::AcceptUnconfirmed, Unconfirmed) => Some(Confirmed),
            (Transition::RejectUnconfirmed, Unconfirmed) => Some(Rejected),
            (Transition::PostponeUnconfirmed, Unconfirmed) => Some(Deferred),
            (Transition::Begin, Confirmed) => Some(InProgress),
            (Transition::Resolve, Confirmed | InProgress) => Some(Resolved),
            (Transition::Postpone, Confirmed | InProgress) => Some(Deferred),
            (Transition::AcceptDeferred, Deferred) => Some(Confirmed),
            (Transition::Close, Resolved | Rejected) => Some(Closed),
            (Transition::Reopen, Resolved | Rejected | Closed) => Some(Confirmed),
            _ => None,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The issue workflow. Stateless; the state lives on each issue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Workflow;

impl Workflow {
    /// Transitions that can fire from `state`.
    pub fn available(&self, state: IssueState) -> Vec<Transition> {
        Transition::ALL
            .into_iter()
            .filter(|t| t.apply(state).is_some())
            .collect()
    }

    /// Fire `transition` on `issue`, returning the new state.
    pub fn do_action_for(&self, issue: &mut Issue, transition: Transition) -> Result<IssueState> {
        let from = self.current_state(issue);
        let to = transition
            .apply(from)
            .ok_or(PoiError::InvalidTransition {
                transition,
                state: from,
            })?;

        log::debug!("issue {}: {} -> {} via {}", issue.id, from, to, transition);
        issue.state = to;
        issue.touch();
        Ok(to)
    }
}

impl StateReader for Workflow {
    fn current_state(&self, issue: &Issue) -> IssueState {
        issue.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MemberId, NewIssue};

    fn issue() -> Issue {
        Issue::new(1, MemberId::from("test_user_1_"), NewIssue::titled("Crash"))
    }

    #[test]
    fn test_accept_unconfirmed() {
        let mut issue = issue();
        let state = Workflow.do_action_for(&mut issue, Transition::AcceptUnconfirmed).unwrap();
        assert_eq!(state, IssueState::Confirmed);
        assert_eq!(issue.state, IssueState::Confirmed);
    }

    #[test]
    fn test_reject_unconfirmed() {
        let mut issue = issue();
        Workflow.do_action_for(&mut issue, Transition::RejectUnconfirmed).unwrap();
        assert_eq!(Workflow.current_state(&issue), IssueState::Rejected);
    }

    #[test]
    fn test_invalid_transition_leaves_state() {
        let mut issue = issue();
        let err = Workflow.do_action_for(&mut issue, Transition::Close).unwrap_err();
        assert!(matches!(
            err,
            PoiError::InvalidTransition {
                transition: Transition::Close,
                state: IssueState::Unconfirmed
            }
        ));
        assert_eq!(issue.state, IssueState::Unconfirmed);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut issue = issue();
        for transition in [
            Transition::AcceptUnconfirmed,
            Transition::Begin,
            Transition::Resolve,
            Transition::Close,
            Transition::Reopen,
        ] {
            Workflow.do_action_for(&mut issue, transition).unwrap();
        }
        assert_eq!(issue.state, IssueState::Confirmed);
    }

    #[test]
    fn test_available_from_unconfirmed() {
        assert_eq!(
            Workflow.available(IssueState::Unconfirmed),
            vec![
                Transition::AcceptUnconfirmed,
                Transition::RejectUnconfirmed,
                Transition::PostponeUnconfirmed,
            ]
        );
        assert!(Workflow.available(IssueState::Closed).contains(&Transition::Reopen));
    }
}

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Workflow states an issue can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueState {
    Unconfirmed,
    Confirmed,
    InProgress,
    Resolved,
    Rejected,
    Deferred,
    Closed,
}

impl IssueState {
    pub const ALL: [IssueState; 7] = [
        IssueState::Unconfirmed,
        IssueState::Confirmed,
        IssueState::InProgress,
        IssueState::Resolved,
        IssueState::Rejected,
        IssueState::Deferred,
        IssueState::Closed,
    ];

    /// States considered unresolved when no explicit set is configured.
    pub const ACTIVE: [IssueState; 3] = [
        IssueState::Unconfirmed,
        IssueState::Confirmed,
        IssueState::InProgress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueState::Unconfirmed => "unconfirmed",
            IssueState::Confirmed => "confirmed",
            IssueState::InProgress => "in-progress",
            IssueState::Resolved => "resolved",
            IssueState::Rejected => "rejected",
            IssueState::Deferred => "deferred",
            IssueState::Closed => "closed",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let label = self.as_str();
        match self {
            IssueState::Unconfirmed => label.bright_black().to_string(),
            IssueState::Confirmed => label.yellow().to_string(),
            IssueState::InProgress => label.blue().to_string(),
            IssueState::Resolved | IssueState::Closed => label.green().to_string(),
            IssueState::Rejected => label.red().to_string(),
            IssueState::Deferred => label.magenta().to_string(),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("unknown issue state '{s}'"))
    }
}

/// The set of state names a query treats as open.
///
/// Names are kept as plain strings: a name outside the state vocabulary is
/// accepted and simply never matches an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenStates(BTreeSet<String>);

impl OpenStates {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, state: IssueState) -> bool {
        self.0.contains(state.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for OpenStates {
    fn default() -> Self {
        Self::from_names(IssueState::ACTIVE.iter().map(|s| s.as_str()))
    }
}

impl From<&[IssueState]> for OpenStates {
    fn from(states: &[IssueState]) -> Self {
        Self::from_names(states.iter().map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names_round_trip_through_from_str() {
        for state in IssueState::ALL {
            assert_eq!(state.as_str().parse::<IssueState>(), Ok(state));
        }
        assert!("open".parse::<IssueState>().is_err());
    }

    #[test]
    fn test_state_serializes_kebab_case() {
        let json = serde_json::to_string(&IssueState::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_default_open_states() {
        let open = OpenStates::default();
        assert!(open.contains(IssueState::Unconfirmed));
        assert!(open.contains(IssueState::Confirmed));
        assert!(open.contains(IssueState::InProgress));
        assert!(!open.contains(IssueState::Rejected));
        assert!(!open.contains(IssueState::Closed));
    }

    #[test]
    fn test_unknown_state_names_never_match() {
        let open = OpenStates::from_names(["bogus", "open"]);
        assert!(!open.is_empty());
        for state in IssueState::ALL {
            assert!(!open.contains(state));
        }
    }
}

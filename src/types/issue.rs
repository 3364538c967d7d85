use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IssueState, MemberId, Responsible, Severity};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    creator: MemberId,
    pub responsible: Responsible,
    pub state: IssueState,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub watchers: Vec<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_release: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Fields supplied by the member filing an issue.
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub title: String,
    pub details: Option<String>,
    pub severity: Severity,
    pub responsible: Responsible,
    pub tags: Vec<String>,
}

impl NewIssue {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn responsible(mut self, responsible: impl Into<Responsible>) -> Self {
        self.responsible = responsible.into();
        self
    }
}

impl Issue {
    pub(crate) fn new(id: u32, creator: MemberId, draft: NewIssue) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            details: draft.details,
            creator,
            responsible: draft.responsible,
            state: IssueState::Unconfirmed,
            severity: draft.severity,
            tags: draft.tags,
            watchers: Vec::new(),
            target_release: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// The member who filed the issue. Never changes after creation.
    pub fn creator(&self) -> &MemberId {
        &self.creator
    }

    pub(crate) fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

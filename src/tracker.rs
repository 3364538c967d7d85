use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PoiError, Result};
use crate::permissions::Permission;
use crate::query;
use crate::security;
use crate::types::{Issue, IssueState, MemberId, NewIssue, OpenStates, Responsible, Severity};
use crate::workflow::{Transition, Workflow};

/// A container of issues plus the members who manage it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Tracker {
    pub title: String,
    managers: Vec<MemberId>,
    issues: Vec<Issue>,
    next_id: u32,
    #[serde(skip)]
    workflow: Workflow,
}

impl Tracker {
    pub fn new(title: impl Into<String>, managers: Vec<MemberId>) -> Self {
        Self {
            title: title.into(),
            managers,
            issues: Vec::new(),
            next_id: 1,
            workflow: Workflow,
        }
    }

    /// Managers in the order they were configured.
    pub fn managers(&self) -> &[MemberId] {
        &self.managers
    }

    pub fn is_manager(&self, member: &MemberId) -> bool {
        self.managers.contains(member)
    }

    /// All issues in creation order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue(&self, id: u32) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .ok_or(PoiError::IssueNotFound(id))
    }

    fn issue_mut(&mut self, id: u32) -> Result<&mut Issue> {
        self.issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(PoiError::IssueNotFound(id))
    }

    /// File a new issue as `creator`. It starts out unconfirmed.
    pub fn create_issue(&mut self, creator: &MemberId, draft: NewIssue) -> Result<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(PoiError::IdsExhausted(id))?;

        let issue = Issue::new(id, creator.clone(), draft);
        log::debug!("{creator} filed issue {id} ({})", issue.responsible);
        self.issues.push(issue);
        Ok(id)
    }

    /// Checks that issue ids are unique and that `next_id` is past all of them.
    pub fn check_ids(&self) -> std::result::Result<(), String> {
        let mut seen = HashSet::new();
        for issue in &self.issues {
            if !seen.insert(issue.id) {
                return Err(format!("issue id {} appears more than once", issue.id));
            }
            if issue.id >= self.next_id {
                return Err(format!(
                    "next_id {} is not past issue id {}",
                    self.next_id, issue.id
                ));
            }
        }
        if self.next_id == 0 {
            return Err("next_id must start at 1".to_string());
        }
        Ok(())
    }

    /// Fire a workflow transition on behalf of `actor`.
    pub fn do_action_for(
        &mut self,
        id: u32,
        transition: Transition,
        actor: &MemberId,
    ) -> Result<IssueState> {
        self.authorize(id, actor, Permission::ModifyIssueState)?;
        let workflow = self.workflow;
        workflow.do_action_for(self.issue_mut(id)?, transition)
    }

    pub fn assign(&mut self, id: u32, responsible: Responsible, actor: &MemberId) -> Result<()> {
        self.authorize(id, actor, Permission::ModifyIssueAssignment)?;
        let issue = self.issue_mut(id)?;
        log::debug!("issue {id}: responsible {} -> {responsible}", issue.responsible);
        issue.responsible = responsible;
        issue.touch();
        Ok(())
    }

    pub fn set_severity(&mut self, id: u32, severity: Severity, actor: &MemberId) -> Result<()> {
        self.authorize(id, actor, Permission::ModifyIssueSeverity)?;
        let issue = self.issue_mut(id)?;
        issue.severity = severity;
        issue.touch();
        Ok(())
    }

    pub fn set_target_release(
        &mut self,
        id: u32,
        release: Option<String>,
        actor: &MemberId,
    ) -> Result<()> {
        self.authorize(id, actor, Permission::ModifyIssueTargetRelease)?;
        let issue = self.issue_mut(id)?;
        issue.target_release = release;
        issue.touch();
        Ok(())
    }

    pub fn add_tag(&mut self, id: u32, tag: &str, actor: &MemberId) -> Result<()> {
        self.authorize(id, actor, Permission::ModifyIssueTags)?;
        let issue = self.issue_mut(id)?;
        if !issue.tags.iter().any(|t| t == tag) {
            issue.tags.push(tag.to_string());
            issue.touch();
        }
        Ok(())
    }

    /// Add `watcher` to the issue's watchers.
    pub fn watch(&mut self, id: u32, watcher: &MemberId, actor: &MemberId) -> Result<()> {
        // Members may always watch on their own behalf.
        if watcher != actor {
            self.authorize(id, actor, Permission::ModifyIssueWatchers)?;
        }
        let issue = self.issue_mut(id)?;
        if !issue.watchers.contains(watcher) {
            issue.watchers.push(watcher.clone());
            issue.touch();
        }
        Ok(())
    }

    fn authorize(&self, id: u32, actor: &MemberId, permission: Permission) -> Result<()> {
        let issue = self.issue(id)?;
        security::require(self, actor, permission, Some(issue))
    }

    /// Open issues filed by or assigned to `member`.
    pub fn my_issues(&self, member: &MemberId, open_states: &OpenStates) -> Vec<&Issue> {
        query::my_issues(&self.workflow, &self.issues, member, open_states)
    }

    /// Open, unassigned issues filed by someone other than `member`.
    pub fn orphaned_issues(&self, member: &MemberId, open_states: &OpenStates) -> Vec<&Issue> {
        query::orphaned_issues(&self.workflow, &self.issues, member, open_states)
    }
}

//! Roles within a tracker and the permissions they grant.

use std::fmt;

use crate::error::{PoiError, Result};
use crate::permissions::Permission;
use crate::tracker::Tracker;
use crate::types::{Issue, MemberId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Listed in the tracker's managers.
    Manager,
    /// Anyone else, including ids the tracker has never seen.
    Member,
}

const MEMBER_GRANTS: [Permission; 4] = [
    Permission::View,
    Permission::AccessContentsInformation,
    Permission::EditResponse,
    Permission::UploadAttachment,
];

const CREATOR_GRANTS: [Permission; 2] = [
    Permission::ModifyIssueTags,
    Permission::ModifyIssueWatchers,
];

impl Role {
    pub fn of(tracker: &Tracker, member: &MemberId) -> Self {
        if tracker.is_manager(member) {
            Role::Manager
        } else {
            Role::Member
        }
    }

    pub fn grants(self, permission: Permission) -> bool {
        match self {
            Role::Manager => true,
            Role::Member => MEMBER_GRANTS.contains(&permission),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Manager => f.write_str("Manager"),
            Role::Member => f.write_str("Member"),
        }
    }
}

/// Whether `member` holds `permission`, optionally in the context of `issue`.
pub fn has_permission(
    tracker: &Tracker,
    member: &MemberId,
    permission: Permission,
    issue: Option<&Issue>,
) -> bool {
    if Role::of(tracker, member).grants(permission) {
        return true;
    }

    issue.is_some_and(|issue| issue.creator() == member && CREATOR_GRANTS.contains(&permission))
}

/// Like [`has_permission`], but fails with `PermissionDenied`.
pub fn require(
    tracker: &Tracker,
    member: &MemberId,
    permission: Permission,
    issue: Option<&Issue>,
) -> Result<()> {
    if has_permission(tracker, member, permission, issue) {
        Ok(())
    } else {
        log::info!("{member} denied '{permission}'");
        Err(PoiError::PermissionDenied {
            member: member.clone(),
            permission: permission.value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewIssue;

    fn tracker() -> Tracker {
        Tracker::new("Tracker", vec![MemberId::from("member1")])
    }

    #[test]
    fn test_manager_holds_everything() {
        let tracker = tracker();
        let manager = MemberId::from("member1");
        for permission in Permission::ALL {
            assert!(has_permission(&tracker, &manager, permission, None));
        }
    }

    #[test]
    fn test_member_grants() {
        let tracker = tracker();
        let member = MemberId::from("member3");
        assert_eq!(Role::of(&tracker, &member), Role::Member);
        assert!(has_permission(&tracker, &member, Permission::View, None));
        assert!(has_permission(&tracker, &member, Permission::UploadAttachment, None));
        assert!(!has_permission(&tracker, &member, Permission::ModifyIssueState, None));
        assert!(!has_permission(&tracker, &member, Permission::ManageTracker, None));
    }

    #[test]
    fn test_creator_may_edit_tags_on_own_issue() {
        let mut tracker = tracker();
        let creator = MemberId::from("member3");
        let other = MemberId::from("member2");
        let id = tracker.create_issue(&creator, NewIssue::titled("Typo")).unwrap();
        let issue = tracker.issue(id).unwrap();

        assert!(has_permission(&tracker, &creator, Permission::ModifyIssueTags, Some(issue)));
        assert!(!has_permission(&tracker, &other, Permission::ModifyIssueTags, Some(issue)));
        assert!(!has_permission(&tracker, &creator, Permission::ModifyIssueSeverity, Some(issue)));
    }

    #[test]
    fn test_require_reports_permission_string() {
        let tracker = tracker();
        let err = require(&tracker, &MemberId::from("nobody"), Permission::ManageTracker, None)
            .unwrap_err();
        assert!(matches!(
            err,
            PoiError::PermissionDenied { permission: "Poi: Manage tracker", .. }
        ));
    }
}

//! Permission strings used by Poi for access-control checks.
//!
//! The values are stable identifiers looked up by name elsewhere; changing
//! one breaks every role mapping that refers to it.

use std::fmt;

/// Permissions defined by the host content framework and re-exported here.
pub mod base {
    pub const VIEW: &str = "View";
    pub const MODIFY_PORTAL_CONTENT: &str = "Modify portal content";
    pub const ACCESS_CONTENTS_INFORMATION: &str = "Access contents information";
}

pub use base::{ACCESS_CONTENTS_INFORMATION, MODIFY_PORTAL_CONTENT, VIEW};

pub const MANAGE_TRACKER: &str = "Poi: Manage tracker";
pub const EDIT_RESPONSE: &str = "Poi: Edit response";
pub const MODIFY_ISSUE_SEVERITY: &str = "Poi: Modify issue severity";
pub const MODIFY_ISSUE_ASSIGNMENT: &str = "Poi: Modify issue assignment";
pub const MODIFY_ISSUE_STATE: &str = "Poi: Modify issue state";
pub const MODIFY_ISSUE_TAGS: &str = "Poi: Modify issue tags";
pub const MODIFY_ISSUE_WATCHERS: &str = "Poi: Modify issue watchers";
pub const MODIFY_ISSUE_TARGET_RELEASE: &str = "Poi: Modify issue target release";
pub const UPLOAD_ATTACHMENT: &str = "Poi: Upload attachment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    View,
    ModifyPortalContent,
    AccessContentsInformation,
    ManageTracker,
    EditResponse,
    ModifyIssueSeverity,
    ModifyIssueAssignment,
    ModifyIssueState,
    ModifyIssueTags,
    ModifyIssueWatchers,
    ModifyIssueTargetRelease,
    UploadAttachment,
}

impl Permission {
    /// Every permission, host re-exports first, in declaration order.
    pub const ALL: [Permission; 12] = [
        Permission::View,
        Permission::ModifyPortalContent,
        Permission::AccessContentsInformation,
        Permission::ManageTracker,
        Permission::EditResponse,
        Permission::ModifyIssueSeverity,
        Permission::ModifyIssueAssignment,
        Permission::ModifyIssueState,
        Permission::ModifyIssueTags,
        Permission::ModifyIssueWatchers,
        Permission::ModifyIssueTargetRelease,
        Permission::UploadAttachment,
    ];

    /// The name consumers use to look the permission up.
    pub fn name(self) -> &'static str {
        match self {
            Permission::View => "View",
            Permission::ModifyPortalContent => "ModifyPortalContent",
            Permission::AccessContentsInformation => "AccessContentsInformation",
            Permission::ManageTracker => "ManageTracker",
            Permission::EditResponse => "EditResponse",
            Permission::ModifyIssueSeverity => "ModifyIssueSeverity",
            Permission::ModifyIssueAssignment => "ModifyIssueAssignment",
            Permission::ModifyIssueState => "ModifyIssueState",
            Permission::ModifyIssueTags => "ModifyIssueTags",
            Permission::ModifyIssueWatchers => "ModifyIssueWatchers",
            Permission::ModifyIssueTargetRelease => "ModifyIssueTargetRelease",
            Permission::UploadAttachment => "UploadAttachment",
        }
    }

    /// The permission string checked by the security layer.
    pub fn value(self) -> &'static str {
        match self {
            Permission::View => VIEW,
            Permission::ModifyPortalContent => MODIFY_PORTAL_CONTENT,
            Permission::AccessContentsInformation => ACCESS_CONTENTS_INFORMATION,
            Permission::ManageTracker => MANAGE_TRACKER,
            Permission::EditResponse => EDIT_RESPONSE,
            Permission::ModifyIssueSeverity => MODIFY_ISSUE_SEVERITY,
            Permission::ModifyIssueAssignment => MODIFY_ISSUE_ASSIGNMENT,
            Permission::ModifyIssueState => MODIFY_ISSUE_STATE,
            Permission::ModifyIssueTags => MODIFY_ISSUE_TAGS,
            Permission::ModifyIssueWatchers => MODIFY_ISSUE_WATCHERS,
            Permission::ModifyIssueTargetRelease => MODIFY_ISSUE_TARGET_RELEASE,
            Permission::UploadAttachment => UPLOAD_ATTACHMENT,
        }
    }

    /// Whether the permission comes from the host's base set.
    pub fn is_base(self) -> bool {
        matches!(
            self,
            Permission::View
                | Permission::ModifyPortalContent
                | Permission::AccessContentsInformation
        )
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Look up a permission string by its name.
pub fn lookup(name: &str) -> Option<&'static str> {
    Permission::from_name(name).map(Permission::value)
}

/// `(name, value)` pairs for the whole table.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    Permission::ALL.into_iter().map(|p| (p.name(), p.value()))
}

//! Per-member issue views: "my issues" and "orphaned issues".
//!
//! Both are pure filters over an issue sequence. The member is always passed
//! in explicitly and the state is read through [`StateReader`]. Results keep
//! the input's enumeration order. Nothing here fails: an unknown member or a
//! set of unknown state names just produces an empty result.

use crate::types::{Issue, MemberId, OpenStates};
use crate::workflow::StateReader;

/// Open, and filed by or assigned to `member`.
pub fn is_mine<R: StateReader>(
    reader: &R,
    issue: &Issue,
    member: &MemberId,
    open_states: &OpenStates,
) -> bool {
    open_states.contains(reader.current_state(issue))
        && (issue.creator() == member || issue.responsible.is(member))
}

/// Open, nobody responsible, and filed by someone other than `member`.
pub fn is_orphaned<R: StateReader>(
    reader: &R,
    issue: &Issue,
    member: &MemberId,
    open_states: &OpenStates,
) -> bool {
    open_states.contains(reader.current_state(issue))
        && issue.responsible.is_unassigned()
        && issue.creator() != member
}

pub fn my_issues<'a, R, I>(
    reader: &R,
    issues: I,
    member: &MemberId,
    open_states: &OpenStates,
) -> Vec<&'a Issue>
where
    R: StateReader,
    I: IntoIterator<Item = &'a Issue>,
{
    let found: Vec<&Issue> = issues
        .into_iter()
        .filter(|issue| is_mine(reader, issue, member, open_states))
        .collect();
    log::debug!("{} open issue(s) for {member}", found.len());
    found
}

pub fn orphaned_issues<'a, R, I>(
    reader: &R,
    issues: I,
    member: &MemberId,
    open_states: &OpenStates,
) -> Vec<&'a Issue>
where
    R: StateReader,
    I: IntoIterator<Item = &'a Issue>,
{
    let found: Vec<&Issue> = issues
        .into_iter()
        .filter(|issue| is_orphaned(reader, issue, member, open_states))
        .collect();
    log::debug!("{} orphaned issue(s) visible to {member}", found.len());
    found
}

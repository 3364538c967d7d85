use tabled::Tabled;

use crate::cli::{IssueCreateArgs, StateFilterArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, format_relative, truncate};
use crate::store::TrackerStore;
use crate::tracker::Tracker;
use crate::types::{Issue, IssueState, MemberId, NewIssue, OpenStates, Responsible, Severity};
use crate::workflow::{Transition, Workflow};

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Creator")]
    creator: String,
    #[tabled(rename = "Responsible")]
    responsible: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id,
            title: truncate(&issue.title, 50),
            state: issue.state.colored(),
            severity: issue.severity.colored(),
            creator: issue.creator().to_string(),
            responsible: issue.responsible.to_string(),
            updated: format_relative(issue.modified_at),
        }
    }
}

fn compact_line(issue: &Issue) -> String {
    format!(
        "#{} [{}] {} ({})",
        issue.id, issue.state, issue.title, issue.responsible
    )
}

fn print_issues(issues: &[&Issue]) {
    output::print_table(
        issues,
        |issue| IssueRow::from(*issue),
        |issue| compact_line(issue),
    );
}

/// Every issue, or only those whose state is named in `states`.
fn listed<'a>(tracker: &'a Tracker, states: Vec<String>) -> Vec<&'a Issue> {
    if states.is_empty() {
        return tracker.issues().iter().collect();
    }

    let open = OpenStates::from_names(states);
    tracker
        .issues()
        .iter()
        .filter(|issue| open.contains(issue.state))
        .collect()
}

fn my_view<'a>(
    tracker: &'a Tracker,
    config: &Config,
    member: &MemberId,
    args: &StateFilterArgs,
) -> Vec<&'a Issue> {
    tracker.my_issues(member, &config.resolve_open_states(&args.states))
}

fn orphaned_view<'a>(
    tracker: &'a Tracker,
    config: &Config,
    member: &MemberId,
    args: &StateFilterArgs,
) -> Vec<&'a Issue> {
    tracker.orphaned_issues(member, &config.resolve_open_states(&args.states))
}

pub fn list(store: &TrackerStore, args: StateFilterArgs) -> Result<()> {
    let tracker = store.load()?;
    print_issues(&listed(&tracker, args.states));
    Ok(())
}

/// Open issues filed by or assigned to `member`.
pub fn mine(
    store: &TrackerStore,
    config: &Config,
    member: &MemberId,
    args: StateFilterArgs,
) -> Result<()> {
    let tracker = store.load()?;
    print_issues(&my_view(&tracker, config, member, &args));
    Ok(())
}

/// Open, unassigned issues filed by someone other than `member`.
pub fn orphaned(
    store: &TrackerStore,
    config: &Config,
    member: &MemberId,
    args: StateFilterArgs,
) -> Result<()> {
    let tracker = store.load()?;
    print_issues(&orphaned_view(&tracker, config, member, &args));
    Ok(())
}

pub fn show(store: &TrackerStore, id: u32) -> Result<()> {
    let tracker = store.load()?;
    let issue = tracker.issue(id)?;

    output::print_item(issue, |issue| {
        println!("#{} - {}", issue.id, issue.title);
        println!();

        if let Some(details) = &issue.details {
            println!("{details}");
            println!();
        }

        println!("State:       {}", issue.state.colored());
        println!("Severity:    {}", issue.severity.colored());
        println!("Creator:     {}", issue.creator());
        println!("Responsible: {}", issue.responsible);
        if let Some(release) = &issue.target_release {
            println!("Release:     {release}");
        }
        if !issue.tags.is_empty() {
            println!("Tags:        {}", issue.tags.join(", "));
        }
        if !issue.watchers.is_empty() {
            let watchers: Vec<&str> = issue.watchers.iter().map(MemberId::as_str).collect();
            println!("Watchers:    {}", watchers.join(", "));
        }
        println!("Created:     {}", format_relative(issue.created_at));
        println!("Updated:     {}", format_relative(issue.modified_at));

        let next: Vec<&str> = Workflow
            .available(issue.state)
            .into_iter()
            .map(Transition::as_str)
            .collect();
        if !next.is_empty() {
            println!("Transitions: {}", next.join(", "));
        }
    });

    Ok(())
}

pub fn create(store: &TrackerStore, creator: &MemberId, args: IssueCreateArgs) -> Result<()> {
    let mut tracker = store.load()?;

    let draft = NewIssue {
        title: args.title,
        details: args.details,
        severity: args.severity,
        responsible: args.responsible.unwrap_or_default(),
        tags: args.tags,
    };

    let id = tracker.create_issue(creator, draft)?;
    store.save(&tracker)?;

    let issue = tracker.issue(id)?;
    output::print_message(&format!("Created #{} - {}", issue.id, issue.title));
    Ok(())
}

pub fn transition(
    store: &TrackerStore,
    actor: &MemberId,
    id: u32,
    transition: Transition,
) -> Result<()> {
    let mut tracker = store.load()?;
    let state: IssueState = tracker.do_action_for(id, transition, actor)?;
    store.save(&tracker)?;

    output::print_message(&format!("#{id} is now {state}"));
    Ok(())
}

pub fn assign(
    store: &TrackerStore,
    actor: &MemberId,
    id: u32,
    responsible: Responsible,
) -> Result<()> {
    let mut tracker = store.load()?;
    tracker.assign(id, responsible.clone(), actor)?;
    store.save(&tracker)?;

    output::print_message(&format!("#{id} responsible: {responsible}"));
    Ok(())
}

pub fn set_severity(
    store: &TrackerStore,
    actor: &MemberId,
    id: u32,
    severity: Severity,
) -> Result<()> {
    let mut tracker = store.load()?;
    tracker.set_severity(id, severity, actor)?;
    store.save(&tracker)?;

    output::print_message(&format!("#{id} severity: {severity}"));
    Ok(())
}

pub fn set_release(
    store: &TrackerStore,
    actor: &MemberId,
    id: u32,
    release: Option<String>,
) -> Result<()> {
    let mut tracker = store.load()?;
    let message = match &release {
        Some(release) => format!("#{id} targets {release}"),
        None => format!("#{id} has no target release"),
    };
    tracker.set_target_release(id, release, actor)?;
    store.save(&tracker)?;

    output::print_message(&message);
    Ok(())
}

pub fn tag(store: &TrackerStore, actor: &MemberId, id: u32, tag: &str) -> Result<()> {
    let mut tracker = store.load()?;
    tracker.add_tag(id, tag, actor)?;
    store.save(&tracker)?;

    output::print_message(&format!("Tagged #{id} with {tag}"));
    Ok(())
}

pub fn watch(
    store: &TrackerStore,
    actor: &MemberId,
    id: u32,
    watcher: Option<String>,
) -> Result<()> {
    let mut tracker = store.load()?;
    let watcher = watcher.map(MemberId::from).unwrap_or_else(|| actor.clone());
    tracker.watch(id, &watcher, actor)?;
    store.save(&tracker)?;

    output::print_message(&format!("{watcher} is watching #{id}"));
    Ok(())
}

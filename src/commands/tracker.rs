use serde::Serialize;
use tabled::Tabled;

use crate::error::{PoiError, Result};
use crate::output;
use crate::security::Role;
use crate::store::TrackerStore;
use crate::tracker::Tracker;
use crate::types::MemberId;

#[derive(Serialize)]
struct ManagerEntry {
    position: usize,
    member: String,
}

#[derive(Tabled)]
struct ManagerRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Member")]
    member: String,
}

impl From<&ManagerEntry> for ManagerRow {
    fn from(entry: &ManagerEntry) -> Self {
        Self {
            position: entry.position,
            member: entry.member.clone(),
        }
    }
}

pub fn create(
    store: &TrackerStore,
    title: String,
    managers: Vec<String>,
    force: bool,
) -> Result<()> {
    if store.exists() && !force {
        return Err(PoiError::TrackerExists(store.path().to_path_buf()));
    }

    let managers: Vec<MemberId> = managers.into_iter().map(MemberId::from).collect();
    let tracker = Tracker::new(title, managers);
    store.save(&tracker)?;

    output::print_message(&format!(
        "Created tracker '{}' at {}",
        tracker.title,
        store.path().display()
    ));
    Ok(())
}

pub fn managers(store: &TrackerStore) -> Result<()> {
    let tracker = store.load()?;

    let entries: Vec<ManagerEntry> = tracker
        .managers()
        .iter()
        .enumerate()
        .map(|(i, member)| ManagerEntry {
            position: i + 1,
            member: member.to_string(),
        })
        .collect();

    output::print_table(&entries, |entry| ManagerRow::from(entry), |entry| {
        format!("{} ({})", entry.member, Role::Manager)
    });
    Ok(())
}

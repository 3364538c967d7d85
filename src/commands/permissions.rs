use serde::Serialize;
use tabled::Tabled;

use crate::error::{PoiError, Result};
use crate::output;
use crate::permissions::{self, Permission};

#[derive(Serialize)]
struct PermissionEntry {
    name: &'static str,
    value: &'static str,
    source: &'static str,
}

#[derive(Tabled)]
struct PermissionRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Permission")]
    value: &'static str,
    #[tabled(rename = "Source")]
    source: &'static str,
}

impl From<Permission> for PermissionEntry {
    fn from(permission: Permission) -> Self {
        Self {
            name: permission.name(),
            value: permission.value(),
            source: if permission.is_base() { "base" } else { "poi" },
        }
    }
}

impl From<&PermissionEntry> for PermissionRow {
    fn from(entry: &PermissionEntry) -> Self {
        Self {
            name: entry.name,
            value: entry.value,
            source: entry.source,
        }
    }
}

pub fn list(name: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        let value = permissions::lookup(name)
            .ok_or_else(|| PoiError::UnknownPermission(name.to_string()))?;
        output::print_item(&value, |value| println!("{value}"));
        return Ok(());
    }

    let entries: Vec<PermissionEntry> = Permission::ALL
        .into_iter()
        .map(PermissionEntry::from)
        .collect();
    output::print_table(&entries, |entry| PermissionRow::from(entry), |entry| {
        format!("{} = {}", entry.name, entry.value)
    });
    Ok(())
}

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{IssueState, MemberId};
use crate::workflow::Transition;

#[derive(Error, Debug)]
pub enum PoiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No member given. Pass --member, set POI_MEMBER or add member to ~/.config/poi/config.toml"
    )]
    MissingMember,

    #[error("Tracker file not found at {0}. Create one with 'poi tracker create'")]
    TrackerNotFound(PathBuf),

    #[error("Tracker file already exists at {0}. Pass --force to overwrite")]
    TrackerExists(PathBuf),

    #[error("Failed to parse tracker file at {path}: {source}")]
    TrackerParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Tracker file at {path} is inconsistent: {reason}")]
    TrackerInvalid { path: PathBuf, reason: String },

    #[error("Issue numbers exhausted: no id after {0} is available")]
    IdsExhausted(u32),

    #[error("Failed to write tracker file at {path}: {source}")]
    TrackerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Issue not found: {0}")]
    IssueNotFound(u32),

    #[error("Transition '{transition}' is not available from state '{state}'")]
    InvalidTransition {
        transition: Transition,
        state: IssueState,
    },

    #[error("Member '{member}' lacks permission '{permission}'")]
    PermissionDenied {
        member: MemberId,
        permission: &'static str,
    },

    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
}

pub type Result<T> = std::result::Result<T, PoiError>;

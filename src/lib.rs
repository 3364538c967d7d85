//! Poi: an issue tracker with per-member issue views.
//!
//! The core is [`query`], which decides which open issues belong to a member
//! and which are orphaned. [`tracker`] owns the issues and guards changes
//! with the roles in [`security`] and the transitions in [`workflow`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod permissions;
pub mod query;
pub mod security;
pub mod store;
pub mod tracker;
pub mod types;
pub mod workflow;

pub use error::{PoiError, Result};
pub use tracker::Tracker;
pub use types::{Issue, IssueState, MemberId, NewIssue, OpenStates, Responsible, Severity};
pub use workflow::{StateReader, Transition, Workflow};

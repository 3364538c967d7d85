use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::types::{Responsible, Severity};
use crate::workflow::Transition;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "poi")]
#[command(about = "A small issue tracker with per-member issue views", version)]
#[command(after_help = "EXAMPLES:
    poi issues mine                   List open issues you filed or own
    poi issues orphaned               List open issues nobody has picked up
    poi issue create -t \"Title\"       File a new issue
    poi issue transition 3 accept-unconfirmed
    poi issue assign 3 member1        Make member1 responsible")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logging and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Act as this member (overrides POI_MEMBER and config)
    #[arg(long, short, global = true)]
    pub member: Option<String>,

    /// Tracker file (overrides POI_TRACKER and config)
    #[arg(long, global = true)]
    pub tracker: Option<PathBuf>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage issues
    #[command(
        alias = "i",
        after_help = "EXAMPLES:
    poi issue create -t \"Crash on save\" --severity critical
    poi issue show 3
    poi issue transition 3 accept-unconfirmed
    poi issue assign 3 --unassign"
    )]
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// Per-member issue views
    #[command(after_help = "EXAMPLES:
    poi issues mine
    poi issues mine --state rejected
    poi issues orphaned --member member1")]
    Issues {
        #[command(subcommand)]
        view: IssueViewCommands,
    },
    /// Manage the tracker itself
    Tracker {
        #[command(subcommand)]
        action: TrackerCommands,
    },
    /// List permission strings, or look one up by name
    #[command(after_help = "EXAMPLES:
    poi permissions
    poi permissions ModifyIssueState")]
    Permissions {
        /// Permission name (e.g., ManageTracker)
        name: Option<String>,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    poi completions bash > ~/.bash_completion.d/poi
    poi completions zsh > ~/.zfunc/_poi")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// List every issue, optionally restricted to some states
    List(StateFilterArgs),
    /// Show issue details
    Show {
        /// Issue number
        id: u32,
    },
    /// File a new issue
    Create(IssueCreateArgs),
    /// Fire a workflow transition
    #[command(after_help = "EXAMPLES:
    poi issue transition 3 accept-unconfirmed
    poi issue transition 3 reject-unconfirmed")]
    Transition {
        /// Issue number
        id: u32,
        /// Transition name
        #[arg(value_enum)]
        transition: Transition,
    },
    /// Change who is responsible for an issue
    #[command(after_help = "EXAMPLES:
    poi issue assign 3 member1
    poi issue assign 3 --unassign")]
    Assign {
        /// Issue number
        id: u32,
        /// Member id to make responsible
        #[arg(required_unless_present = "unassign", conflicts_with = "unassign")]
        responsible: Option<Responsible>,
        /// Leave the issue with nobody responsible
        #[arg(long)]
        unassign: bool,
    },
    /// Change an issue's severity
    Severity {
        /// Issue number
        id: u32,
        #[arg(value_enum)]
        severity: Severity,
    },
    /// Set or clear the target release
    Release {
        /// Issue number
        id: u32,
        /// Release name; omit to clear
        release: Option<String>,
    },
    /// Add a tag to an issue
    Tag {
        /// Issue number
        id: u32,
        tag: String,
    },
    /// Watch an issue
    Watch {
        /// Issue number
        id: u32,
        /// Member to add as watcher (defaults to yourself)
        #[arg(long)]
        watcher: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum IssueViewCommands {
    /// Open issues you filed or are responsible for
    Mine(StateFilterArgs),
    /// Open, unassigned issues filed by someone else
    Orphaned(StateFilterArgs),
}

#[derive(Subcommand)]
pub enum TrackerCommands {
    /// Create a new tracker file
    #[command(after_help = "EXAMPLES:
    poi tracker create \"Issue tracker\" --manager member1 --manager member2")]
    Create {
        /// Tracker title
        title: String,
        /// Manager member id (repeatable)
        #[arg(long = "manager", required = true)]
        managers: Vec<String>,
        /// Overwrite an existing tracker file
        #[arg(long)]
        force: bool,
    },
    /// List the tracker's managers
    Managers,
}

#[derive(Args, Clone, Default)]
pub struct StateFilterArgs {
    /// Treat these states as open (repeatable; defaults to the configured set)
    #[arg(long = "state", short = 's')]
    pub states: Vec<String>,
}

#[derive(Args)]
pub struct IssueCreateArgs {
    /// Issue title
    #[arg(long, short)]
    pub title: String,

    /// Issue details
    #[arg(long, short)]
    pub details: Option<String>,

    /// Responsible member (defaults to unassigned)
    #[arg(long, short)]
    pub responsible: Option<Responsible>,

    /// Severity
    #[arg(long, value_enum, default_value = "medium")]
    pub severity: Severity,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

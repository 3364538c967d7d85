use std::fmt;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Severity levels for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks a release
    Critical,
    /// Should be fixed soon
    Important,
    /// Default severity
    #[default]
    Medium,
    /// Cosmetic or minor
    Low,
}

impl Severity {
    /// Get the label for this severity.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Important => "Important",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let label = self.label();
        match self {
            Severity::Critical => label.red().bold().to_string(),
            Severity::Important => label.yellow().bold().to_string(),
            Severity::Medium => label.blue().to_string(),
            Severity::Low => label.bright_black().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

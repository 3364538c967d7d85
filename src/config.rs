use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{PoiError, Result};
use crate::types::{MemberId, OpenStates};

const MEMBER_ENV: &str = "POI_MEMBER";
const TRACKER_ENV: &str = "POI_TRACKER";

#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct Config {
    pub member: Option<String>,
    pub tracker: Option<PathBuf>,
    pub open_states: Option<Vec<String>>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| PoiError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| PoiError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "poi").ok_or(PoiError::NoConfigDir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolve the acting member: explicit flag, then env var, then config file.
    /// Blank values count as absent.
    pub fn resolve_member(&self, explicit: Option<&str>) -> Result<MemberId> {
        let env = std::env::var(MEMBER_ENV).ok();
        Self::first_member([explicit, env.as_deref(), self.member.as_deref()])
    }

    fn first_member<const N: usize>(sources: [Option<&str>; N]) -> Result<MemberId> {
        sources
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|member| !member.is_empty())
            .map(MemberId::from)
            .ok_or(PoiError::MissingMember)
    }

    /// Resolve the tracker file: explicit flag, then env var, then config, then data dir
    pub fn resolve_tracker(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(TRACKER_ENV) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.tracker {
            return Ok(path.clone());
        }

        Self::project_dirs().map(|dirs| dirs.data_dir().join("tracker.json"))
    }

    /// Open states for queries, preferring explicit names over configured ones
    pub fn resolve_open_states(&self, explicit: &[String]) -> OpenStates {
        if !explicit.is_empty() {
            return OpenStates::from_names(explicit.iter().cloned());
        }

        self.open_states
            .as_ref()
            .map(|names| OpenStates::from_names(names.iter().cloned()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueState;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.member.is_none());
        assert_eq!(config.resolve_open_states(&[]), OpenStates::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "member = \"member1\"\ntracker = \"/tmp/t.json\"\nopen_states = [\"rejected\"]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.resolve_member(Some("member2")).unwrap(),
            MemberId::from("member2")
        );
        assert_eq!(
            config.resolve_tracker(Some(Path::new("/other.json"))).unwrap(),
            PathBuf::from("/other.json")
        );

        let open = config.resolve_open_states(&[]);
        assert!(open.contains(IssueState::Rejected));
        assert!(!open.contains(IssueState::Confirmed));

        let explicit = config.resolve_open_states(&["closed".to_string()]);
        assert!(explicit.contains(IssueState::Closed));
        assert!(!explicit.contains(IssueState::Rejected));
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "member = [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(PoiError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_blank_member_falls_through() {
        assert_eq!(
            Config::first_member([Some(""), Some("  "), Some("member1")]).unwrap(),
            MemberId::from("member1")
        );
        assert_eq!(
            Config::first_member([None, Some("member2"), Some("member1")]).unwrap(),
            MemberId::from("member2")
        );
        assert!(matches!(
            Config::first_member([Some(""), None, Some(" ")]),
            Err(PoiError::MissingMember)
        ));
    }
}

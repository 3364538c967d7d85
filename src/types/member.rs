use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel stored in place of a member id when nobody is responsible.
pub const UNASSIGNED: &str = "(UNASSIGNED)";

/// Opaque member identifier. Unknown ids are valid values that match nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Who is responsible for an issue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Responsible {
    #[default]
    Unassigned,
    Member(MemberId),
}

impl Responsible {
    pub fn is_unassigned(&self) -> bool {
        matches!(self, Responsible::Unassigned)
    }

    /// True when `member` is the responsible member.
    pub fn is(&self, member: &MemberId) -> bool {
        match self {
            Responsible::Member(id) => id == member,
            Responsible::Unassigned => false,
        }
    }

    pub fn member(&self) -> Option<&MemberId> {
        match self {
            Responsible::Member(id) => Some(id),
            Responsible::Unassigned => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Responsible::Member(id) => id.as_str(),
            Responsible::Unassigned => UNASSIGNED,
        }
    }
}

impl fmt::Display for Responsible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MemberId> for Responsible {
    fn from(id: MemberId) -> Self {
        Responsible::Member(id)
    }
}

impl FromStr for Responsible {
    type Err = String;

    /// Only the `(UNASSIGNED)` sentinel means nobody; any other non-blank
    /// text is a member id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err("responsible member must not be blank".to_string())
        } else if s == UNASSIGNED {
            Ok(Responsible::Unassigned)
        } else {
            Ok(Responsible::Member(MemberId::new(s)))
        }
    }
}

impl Serialize for Responsible {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Responsible {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

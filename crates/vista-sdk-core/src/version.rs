use std::fmt;
use std::str::FromStr;

/// A VIS (Vessel Information Structure) release.
///
/// Totally ordered by release date. Each version owns an independent
/// `Gmod`, `Codebooks`, and `Locations` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisVersion {
    V3_4a,
    V3_5a,
    V3_6a,
    V3_7a,
    V3_8a,
    V3_9a,
}

impl VisVersion {
    /// All known versions, oldest first.
    pub const ALL: [VisVersion; 6] = [
        VisVersion::V3_4a,
        VisVersion::V3_5a,
        VisVersion::V3_6a,
        VisVersion::V3_7a,
        VisVersion::V3_8a,
        VisVersion::V3_9a,
    ];

    /// The newest known version.
    pub fn latest() -> VisVersion {
        *VisVersion::ALL.last().expect("ALL is non-empty")
    }

    /// The bare version token, e.g. `"3-4a"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisVersion::V3_4a => "3-4a",
            VisVersion::V3_5a => "3-5a",
            VisVersion::V3_6a => "3-6a",
            VisVersion::V3_7a => "3-7a",
            VisVersion::V3_8a => "3-8a",
            VisVersion::V3_9a => "3-9a",
        }
    }

    /// The `vis-`-prefixed token used in LocalId strings, e.g. `"vis-3-4a"`.
    pub fn as_prefixed_str(&self) -> String {
        format!("vis-{}", self.as_str())
    }

    /// The version immediately following this one, if any.
    pub fn next(&self) -> Option<VisVersion> {
        let idx = VisVersion::ALL.iter().position(|v| v == self)?;
        VisVersion::ALL.get(idx + 1).copied()
    }
}

impl fmt::Display for VisVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a known [`VisVersion`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown VIS version: '{0}'")]
pub struct UnknownVisVersion(pub String);

impl FromStr for VisVersion {
    type Err = UnknownVisVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("vis-").unwrap_or(s);
        VisVersion::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == bare)
            .ok_or_else(|| UnknownVisVersion(s.to_string()))
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

// A dataset is addressed by its persistent identifier, e.g. a DOI such
// as "doi:10.5072/FK2/ABCDEF". The identifier doubles as the source of
// the local root directory: its last '/'-separated segment names the
// directory the dataset is materialized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentId(String);

impl PersistentId {
    /// Returns the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the local root directory name from the identifier.
    ///
    /// The last '/'-separated segment is used: "doi:10.5072/FK2/ABCDEF"
    /// maps to "ABCDEF". An identifier without separators maps to itself.
    pub fn root_directory(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl FromStr for PersistentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Persistent identifier must not be empty".to_string());
        }

        Ok(PersistentId(s.to_string()))
    }
}

impl Display for PersistentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

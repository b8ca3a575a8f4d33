//! Common types for version tracking

use std::fmt;

use chrono::{DateTime, Utc};

/// Identity of a tracked artifact, used as the store key
///
/// Both parts are non-empty and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId {
    group: String,
    name: String,
}

impl ArtifactId {
    /// Returns `None` when either part is empty
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let group = group.into();
        let name = name.into();
        if group.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { group, name })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// Persisted baseline for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub artifact: ArtifactId,
    pub version: String,
    /// When this version was first recorded as the baseline
    pub last_checked: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "lib")]
    #[case("org.example", "")]
    #[case("", "")]
    fn new_rejects_empty_parts(#[case] group: &str, #[case] name: &str) {
        assert_eq!(ArtifactId::new(group, name), None);
    }

    #[test]
    fn display_joins_group_and_name_with_colon() {
        let id = ArtifactId::new("org.example", "lib").unwrap();
        assert_eq!(id.to_string(), "org.example:lib");
    }

    #[test]
    fn equality_is_case_sensitive() {
        assert_ne!(
            ArtifactId::new("org.example", "Lib"),
            ArtifactId::new("org.example", "lib")
        );
    }
}

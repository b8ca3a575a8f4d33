//! Store trait for persisted baselines

#[cfg(test)]
use mockall::automock;

use chrono::{DateTime, Utc};

use crate::version::error::StorageError;
use crate::version::types::{ArtifactId, VersionRecord};

/// Trait for reading and writing the last known version of each artifact
#[cfg_attr(test, automock)]
pub trait VersionStore: Send + Sync {
    /// Get the baseline for an artifact, `None` if it was never recorded
    fn get(&self, artifact: &ArtifactId) -> Result<Option<VersionRecord>, StorageError>;

    /// Replace the baseline for an artifact in a single atomic write
    fn upsert(
        &self,
        artifact: &ArtifactId,
        version: &str,
        checked_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// All baselines, in an order that is stable within one call
    fn list_all(&self) -> Result<Vec<VersionRecord>, StorageError>;
}

//! Resolver trait for fetching the latest published version of an artifact

#[cfg(test)]
use mockall::automock;

use crate::version::error::ResolveError;
use crate::version::types::ArtifactId;

/// Trait for looking up the latest published version from a remote repository
///
/// Implementations make a single attempt per call and keep no state between
/// calls. Retry policy, if any, belongs to the caller.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataResolver: Send + Sync {
    /// Resolves the latest published version string for `artifact`
    ///
    /// # Returns
    /// * `Ok(String)` - The version the repository advertises as latest
    /// * `Err(ResolveError)` - If the repository is unreachable or its metadata is unusable
    async fn resolve(&self, artifact: &ArtifactId) -> Result<String, ResolveError>;
}

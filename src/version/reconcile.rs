//! Change detection against the persisted baseline

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::version::error::{ResolveError, StorageError};
use crate::version::resolver::MetadataResolver;
use crate::version::store::VersionStore;
use crate::version::types::ArtifactId;

/// Outcome of reconciling one artifact
#[derive(Debug)]
pub enum Transition {
    /// No baseline existed; the resolved version is now recorded
    FirstSeen(String),
    /// The resolved version differs from the baseline and replaced it
    Upgraded { previous: String, current: String },
    /// The resolved version equals the baseline
    Unchanged(String),
    /// The remote lookup failed; the baseline was left untouched
    ResolutionFailed(ResolveError),
}

/// Reconcile a single artifact against its stored baseline
///
/// The store always ends up holding the most recently resolved version.
/// Versions are compared as exact strings: any difference, including one
/// that looks like a downgrade, is reported as [`Transition::Upgraded`].
/// An unchanged version is not rewritten, so its `last_checked` keeps the
/// time the version was first recorded.
///
/// Resolution failures are returned as [`Transition::ResolutionFailed`];
/// only store faults surface as `Err`.
pub async fn reconcile<S, R>(
    store: &S,
    resolver: &R,
    artifact: &ArtifactId,
) -> Result<Transition, StorageError>
where
    S: VersionStore + ?Sized,
    R: MetadataResolver + ?Sized,
{
    let prior = store.get(artifact)?;

    let latest = match resolver.resolve(artifact).await {
        Ok(latest) => latest,
        Err(e) => {
            warn!("Failed to resolve {}: {}", artifact, e);
            return Ok(Transition::ResolutionFailed(e));
        }
    };

    let transition = match prior {
        None => {
            store.upsert(artifact, &latest, Utc::now())?;
            info!("First version recorded for {}: {}", artifact, latest);
            Transition::FirstSeen(latest)
        }
        Some(record) if record.version != latest => {
            store.upsert(artifact, &latest, Utc::now())?;
            info!(
                "New version for {}: {} -> {}",
                artifact, record.version, latest
            );
            Transition::Upgraded {
                previous: record.version,
                current: latest,
            }
        }
        Some(_) => {
            debug!("No new version for {}: {}", artifact, latest);
            Transition::Unchanged(latest)
        }
    };

    Ok(transition)
}

//! Batch reconciliation over a catalog of artifacts
//!
//! Each artifact is reconciled on its own; a failure for one never stops the
//! rest. Notifications are sent only after the baseline has been committed,
//! and a failed delivery does not undo that commit.

use tracing::{error, info};

use crate::notify::{DispatchError, Dispatcher, Notification};
use crate::version::error::StorageError;
use crate::version::reconcile::{Transition, reconcile};
use crate::version::resolver::MetadataResolver;
use crate::version::store::VersionStore;
use crate::version::types::ArtifactId;

/// What happened to the notification for one artifact
#[derive(Debug)]
pub enum DispatchStatus {
    /// The transition was not notify-worthy
    NotRequired,
    Sent,
    Failed(DispatchError),
}

/// Per-artifact result of a batch run
#[derive(Debug)]
pub struct ArtifactOutcome {
    pub artifact: ArtifactId,
    pub result: Result<Transition, StorageError>,
    pub dispatch: DispatchStatus,
}

/// Reconcile every artifact in order, notifying `recipient` of changes
///
/// Always returns exactly one outcome per input artifact.
pub async fn run_batch<S, R, D>(
    store: &S,
    resolver: &R,
    dispatcher: &D,
    recipient: &str,
    artifacts: &[ArtifactId],
) -> Vec<ArtifactOutcome>
where
    S: VersionStore + ?Sized,
    R: MetadataResolver + ?Sized,
    D: Dispatcher + ?Sized,
{
    info!("Checking {} artifacts", artifacts.len());

    let mut outcomes = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let result = reconcile(store, resolver, artifact)
            .await
            .inspect_err(|e| error!("Storage error while checking {}: {}", artifact, e));

        let dispatch = match result
            .as_ref()
            .ok()
            .and_then(|transition| Notification::from_transition(artifact, transition))
        {
            Some(notification) => notify(dispatcher, recipient, &notification).await,
            None => DispatchStatus::NotRequired,
        };

        outcomes.push(ArtifactOutcome {
            artifact: artifact.clone(),
            result,
            dispatch,
        });
    }

    outcomes
}

async fn notify<D: Dispatcher + ?Sized>(
    dispatcher: &D,
    recipient: &str,
    notification: &Notification,
) -> DispatchStatus {
    let message = notification.to_message(recipient);
    match dispatcher.dispatch(&message).await {
        Ok(()) => {
            info!("Notification sent for {}", notification.artifact);
            DispatchStatus::Sent
        }
        Err(e) => {
            error!(
                "Failed to send notification for {}: {}",
                notification.artifact, e
            );
            DispatchStatus::Failed(e)
        }
    }
}

//! Operator-facing text output

use crate::version::reconcile::Transition;
use crate::version::types::VersionRecord;
use crate::watch::{ArtifactOutcome, DispatchStatus};

/// Render the dump of all persisted baselines
pub fn render_baselines(records: &[VersionRecord]) -> String {
    if records.is_empty() {
        return "No artifact versions found in the database.\n".to_string();
    }

    let lines: String = records
        .iter()
        .map(|record| format!("- {} - {}\n", record.artifact, record.version))
        .collect();
    format!("Current Artifact Versions:\n{}", lines)
}

/// Render one line describing what happened to an artifact
pub fn render_outcome(outcome: &ArtifactOutcome) -> String {
    let artifact = &outcome.artifact;
    let mut line = match &outcome.result {
        Ok(Transition::FirstSeen(version)) => {
            format!("- First version recorded for {}: {}", artifact, version)
        }
        Ok(Transition::Upgraded { previous, current }) => format!(
            "- New version available for {}: {} (was {})",
            artifact, current, previous
        ),
        Ok(Transition::Unchanged(version)) => {
            format!("- No new version available for {} ({})", artifact, version)
        }
        Ok(Transition::ResolutionFailed(e)) => {
            format!("- Could not resolve {}: {}", artifact, e)
        }
        Err(e) => format!("- Could not check {}: {}", artifact, e),
    };

    if let DispatchStatus::Failed(e) = &outcome.dispatch {
        line.push_str(&format!(" [notification failed: {}]", e));
    }
    line
}

//! Notification payloads and delivery channels
//!
//! # Modules
//!
//! - [`stdout`]: Prints notifications on standard output
//! - [`webhook`]: Posts notifications as JSON to an HTTP endpoint

pub mod stdout;
pub mod webhook;

#[cfg(test)]
use mockall::automock;

use serde::Serialize;
use thiserror::Error;

use crate::config::{ChannelConfig, NotificationConfig};
use crate::version::reconcile::Transition;
use crate::version::types::ArtifactId;

pub use stdout::StdoutDispatcher;
pub use webhook::WebhookDispatcher;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Notification rejected with status {0}")]
    Rejected(u16),

    #[error("Failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

/// A version change worth telling someone about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub artifact: ArtifactId,
    /// `None` when the artifact was seen for the first time
    pub previous: Option<String>,
    pub current: String,
}

impl Notification {
    /// Build a notification for `FirstSeen` and `Upgraded` transitions
    pub fn from_transition(artifact: &ArtifactId, transition: &Transition) -> Option<Self> {
        let (previous, current) = match transition {
            Transition::FirstSeen(current) => (None, current),
            Transition::Upgraded { previous, current } => (Some(previous.clone()), current),
            Transition::Unchanged(_) | Transition::ResolutionFailed(_) => return None,
        };

        Some(Self {
            artifact: artifact.clone(),
            previous,
            current: current.clone(),
        })
    }

    pub fn subject(&self) -> String {
        format!("New Maven Artifact Version: {}", self.artifact)
    }

    pub fn body(&self) -> String {
        let previous = self
            .previous
            .as_deref()
            .unwrap_or("none (first seen)");
        format!(
            "A new version ({}) of {} is available.\nPrevious version: {}",
            self.current, self.artifact, previous
        )
    }

    /// Render this notification for a recipient
    pub fn to_message(&self, recipient: &str) -> Message {
        Message {
            recipient: recipient.to_string(),
            subject: self.subject(),
            body: self.body(),
        }
    }
}

/// Rendered notification as handed to a delivery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Trait for delivering rendered notifications
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    /// Deliver one message, making a single attempt
    async fn dispatch(&self, message: &Message) -> Result<(), DispatchError>;
}

/// Build the dispatcher selected by the notification settings
pub fn dispatcher_from_config(
    config: &NotificationConfig,
) -> Result<Box<dyn Dispatcher>, DispatchError> {
    let dispatcher: Box<dyn Dispatcher> = match &config.channel {
        ChannelConfig::Stdout => Box::new(StdoutDispatcher),
        ChannelConfig::Webhook { url, token } => Box::new(WebhookDispatcher::new(
            url,
            &config.sender,
            token.clone(),
        )?),
    };
    Ok(dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::ResolveError;

    fn lib() -> ArtifactId {
        ArtifactId::new("org.example", "lib").unwrap()
    }

    #[test]
    fn first_seen_notification_mentions_artifact_and_version() {
        let notification =
            Notification::from_transition(&lib(), &Transition::FirstSeen("3.1.0".to_string()))
                .unwrap();

        let message = notification.to_message("ops@example.com");

        assert_eq!(
            message,
            Message {
                recipient: "ops@example.com".to_string(),
                subject: "New Maven Artifact Version: org.example:lib".to_string(),
                body: "A new version (3.1.0) of org.example:lib is available.\nPrevious version: none (first seen)".to_string(),
            }
        );
    }

    #[test]
    fn upgraded_notification_includes_previous_version() {
        let notification = Notification::from_transition(
            &lib(),
            &Transition::Upgraded {
                previous: "3.0.0".to_string(),
                current: "3.1.0".to_string(),
            },
        )
        .unwrap();

        assert_eq!(notification.previous.as_deref(), Some("3.0.0"));
        assert!(notification.body().ends_with("Previous version: 3.0.0"));
    }

    #[test]
    fn unchanged_and_failed_transitions_produce_no_notification() {
        assert_eq!(
            Notification::from_transition(&lib(), &Transition::Unchanged("1".to_string())),
            None
        );
        assert_eq!(
            Notification::from_transition(
                &lib(),
                &Transition::ResolutionFailed(ResolveError::MalformedMetadata("x".to_string()))
            ),
            None
        );
    }
}

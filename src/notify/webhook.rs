//! HTTP webhook delivery channel

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::notify::{DispatchError, Dispatcher, Message};

/// Posts each notification as a JSON document
pub struct WebhookDispatcher {
    client: Client,
    url: String,
    sender: String,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    sender: &'a str,
    #[serde(flatten)]
    message: &'a Message,
}

impl WebhookDispatcher {
    pub fn new(url: &str, sender: &str, token: Option<String>) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .user_agent(concat!("artifact-watch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS as u64))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            sender: sender.to_string(),
            token,
        })
    }
}

#[async_trait]
impl Dispatcher for WebhookDispatcher {
    async fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        let payload = WebhookPayload {
            sender: &self.sender,
            message,
        };

        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Webhook returned status {}: {}", status, self.url);
            return Err(DispatchError::Rejected(status.as_u16()));
        }

        debug!("Delivered notification '{}'", message.subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn message() -> Message {
        Message {
            recipient: "ops@example.com".to_string(),
            subject: "New Maven Artifact Version: org.example:lib".to_string(),
            body: "A new version (3.1.0) of org.example:lib is available.".to_string(),
        }
    }

    #[tokio::test]
    async fn dispatch_posts_message_with_sender_and_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/notify")
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::Json(json!({
                "sender": "watch@example.com",
                "recipient": "ops@example.com",
                "subject": "New Maven Artifact Version: org.example:lib",
                "body": "A new version (3.1.0) of org.example:lib is available."
            })))
            .with_status(202)
            .create_async()
            .await;

        let dispatcher = WebhookDispatcher::new(
            &format!("{}/notify", server.url()),
            "watch@example.com",
            Some("secret".to_string()),
        )
        .unwrap();

        dispatcher.dispatch(&message()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn dispatch_returns_rejected_on_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/notify")
            .with_status(500)
            .create_async()
            .await;

        let dispatcher =
            WebhookDispatcher::new(&format!("{}/notify", server.url()), "", None).unwrap();

        let result = dispatcher.dispatch(&message()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(DispatchError::Rejected(500))));
    }
}

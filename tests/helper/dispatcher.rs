use std::sync::Mutex;

use async_trait::async_trait;

use artifact_watch::notify::{DispatchError, Dispatcher, Message};

/// Dispatcher that keeps every message it is asked to deliver
#[derive(Default)]
pub struct RecordingDispatcher {
    messages: Mutex<Vec<Message>>,
    fail: bool,
}

impl RecordingDispatcher {
    /// Records messages, then reports every delivery as rejected
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        self.messages.lock().unwrap().push(message.clone());
        if self.fail {
            return Err(DispatchError::Rejected(503));
        }
        Ok(())
    }
}

use std::io::Write;

use async_trait::async_trait;

use crate::notify::{DispatchError, Dispatcher, Message};

/// Prints notifications instead of sending them
pub struct StdoutDispatcher;

impl StdoutDispatcher {
    fn write_message(out: &mut impl Write, message: &Message) -> std::io::Result<()> {
        writeln!(out, "To: {}", message.recipient)?;
        writeln!(out, "Subject: {}", message.subject)?;
        writeln!(out, "{}", message.body)?;
        writeln!(out)?;
        out.flush()
    }
}

#[async_trait]
impl Dispatcher for StdoutDispatcher {
    async fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        Self::write_message(&mut std::io::stdout().lock(), message)?;
        Ok(())
    }
}

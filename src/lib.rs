//! Watches Maven artifacts for newly published versions.
//!
//! The reconciliation engine lives in [`version`]; [`watch`] drives it over a
//! catalog of artifacts and forwards notify-worthy transitions to a
//! [`notify::Dispatcher`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod notify;
pub mod report;
pub mod version;
pub mod watch;

//! Shared test utilities

#![allow(dead_code)]

mod dispatcher;
mod registry;

pub use dispatcher::RecordingDispatcher;
pub use registry::{maven_metadata, mock_metadata};

use tempfile::TempDir;

use artifact_watch::version::database::Database;
use artifact_watch::version::types::ArtifactId;

/// Create an empty database in a fresh temporary directory
pub fn create_test_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(&temp_dir.path().join("versions.db")).unwrap();
    (temp_dir, db)
}

pub fn artifact(group: &str, name: &str) -> ArtifactId {
    ArtifactId::new(group, name).unwrap()
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Invalid stored timestamp {0} for {1}")]
    InvalidTimestamp(i64, String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Repository returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),
}

impl ResolveError {
    /// Whether the failure happened before a usable document was received
    pub fn is_transport(&self) -> bool {
        matches!(self, ResolveError::Transport(_) | ResolveError::Status { .. })
    }
}

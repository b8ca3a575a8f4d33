use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row};
use tracing::{debug, info, warn};

use crate::config::STORE_BUSY_TIMEOUT_MS;
use crate::version::error::StorageError;
use crate::version::store::VersionStore;
use crate::version::types::{ArtifactId, VersionRecord};

/// Schema migrations
/// Each version contains a list of SQL statements to execute
const MIGRATIONS: &[&[&str]] = &[
    // v1: last_checked column
    &["ALTER TABLE versions ADD COLUMN last_checked INTEGER NOT NULL DEFAULT 0"],
];

/// SQLite-backed baseline store
///
/// The `versions` table layout matches files written by earlier releases of
/// the tool; those are upgraded in place on open.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (creating if absent) the database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        info!("Opening version database at {:?}", db_path);

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;

        conn.busy_timeout(Duration::from_millis(STORE_BUSY_TIMEOUT_MS))?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        debug!("Database connection established");

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.create_schema()?;
        info!("Version database ready");

        Ok(db)
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> Result<(), StorageError> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| StorageError::LockPoisoned)?;
        conn.close().map_err(|(_, e)| StorageError::Database(e))?;
        debug!("Database connection closed");
        Ok(())
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), StorageError> {
        debug!("Creating database schema");

        let conn = self.lock_conn()?;

        // Base table (without migration columns)
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS versions (
                group_id TEXT,
                artifact_id TEXT,
                version TEXT,
                PRIMARY KEY (group_id, artifact_id)
            )
            "#,
            [],
        )?;

        Self::apply_migrations(&conn)?;

        debug!("Database schema created successfully");
        Ok(())
    }

    /// Apply pending migrations based on user_version pragma
    fn apply_migrations(conn: &Connection) -> Result<(), StorageError> {
        let current_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        for (i, statements) in MIGRATIONS.iter().enumerate() {
            let version = (i + 1) as i32;
            if version > current_version {
                for sql in *statements {
                    // Another process may have applied the same migration
                    // between our user_version read and this statement
                    match conn.execute(sql, []) {
                        Ok(_) => {}
                        Err(rusqlite::Error::SqliteFailure(_, Some(ref msg)))
                            if msg.contains("duplicate column name") =>
                        {
                            debug!("Column already exists, skipping: {}", sql);
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                debug!("Applied migration v{}", version);
            }
        }

        let target_version = MIGRATIONS.len() as i32;
        if target_version > current_version {
            conn.pragma_update(None, "user_version", target_version)?;
            debug!("Updated schema version to v{}", target_version);
        }

        Ok(())
    }
}

/// Raw row as stored, converted to a [`VersionRecord`] outside the row closure
struct StoredRow {
    group_id: String,
    artifact_id: String,
    version: String,
    last_checked: i64,
}

impl StoredRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            group_id: row.get(0)?,
            artifact_id: row.get(1)?,
            version: row.get(2)?,
            last_checked: row.get(3)?,
        })
    }

    fn into_record(self) -> Result<Option<VersionRecord>, StorageError> {
        let Some(artifact) = ArtifactId::new(self.group_id, self.artifact_id) else {
            return Ok(None);
        };
        let last_checked = DateTime::<Utc>::from_timestamp_millis(self.last_checked)
            .ok_or_else(|| StorageError::InvalidTimestamp(self.last_checked, artifact.to_string()))?;

        Ok(Some(VersionRecord {
            artifact,
            version: self.version,
            last_checked,
        }))
    }
}

impl VersionStore for Database {
    fn get(&self, artifact: &ArtifactId) -> Result<Option<VersionRecord>, StorageError> {
        let conn = self.lock_conn()?;
        let result = conn.query_row(
            r#"
            SELECT group_id, artifact_id, version, last_checked FROM versions
            WHERE group_id = ?1 AND artifact_id = ?2 AND version IS NOT NULL
            "#,
            (artifact.group(), artifact.name()),
            StoredRow::from_row,
        );

        match result {
            Ok(row) => row.into_record(),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn upsert(
        &self,
        artifact: &ArtifactId,
        version: &str,
        checked_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let conn = self.lock_conn()?;

        // Single statement, so readers never see the new version with the old timestamp
        conn.execute(
            r#"
            INSERT INTO versions (group_id, artifact_id, version, last_checked)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(group_id, artifact_id)
            DO UPDATE SET version = excluded.version, last_checked = excluded.last_checked
            "#,
            (
                artifact.group(),
                artifact.name(),
                version,
                checked_at.timestamp_millis(),
            ),
        )?;

        debug!("Recorded {} -> {}", artifact, version);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<VersionRecord>, StorageError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT group_id, artifact_id, version, last_checked FROM versions
            WHERE group_id IS NOT NULL AND artifact_id IS NOT NULL AND version IS NOT NULL
            ORDER BY group_id, artifact_id
            "#,
        )?;

        let rows = stmt
            .query_map([], StoredRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_record() {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => warn!("Skipping unreadable baseline: {}", e),
            }
        }

        Ok(records)
    }
}

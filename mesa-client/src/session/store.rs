//! Durable client-side session record
//!
//! The one entity the device persists. Written only after the full
//! establishment sequence commits; every downstream ordering feature
//! reads it. Single writer (the orchestrator), many readers.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::SignalMethod;

use crate::error::CheckInResult;

/// The active session as seen by this device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSessionRecord {
    pub customer_id: String,
    pub customer_name: String,
    pub table_id: String,
    pub table_number: i64,
    pub session_id: String,
    pub method: SignalMethod,
    pub login_time: DateTime<Utc>,
    /// Distance of the fix from the table, when resolved by geolocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

/// Storage for the active session record
pub trait SessionStore: Send + Sync {
    /// Overwrite the active record
    fn save(&self, record: &ClientSessionRecord) -> CheckInResult<()>;
    /// Load the active record, if any
    fn load(&self) -> CheckInResult<Option<ClientSessionRecord>>;
    /// Remove the active record (logout)
    fn clear(&self) -> CheckInResult<()>;
}

/// File-backed store at `<dir>/session/current.json`
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            path: base_dir.join("session/current.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, record: &ClientSessionRecord) -> CheckInResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash never leaves a torn record
        let tmp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(table = record.table_number, "session record saved");
        Ok(())
    }

    fn load(&self) -> CheckInResult<Option<ClientSessionRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let record: ClientSessionRecord = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    fn clear(&self) -> CheckInResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::debug!("session record cleared");
        }
        Ok(())
    }
}

/// In-memory store for tests and embedded hosts
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<ClientSessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, record: &ClientSessionRecord) -> CheckInResult<()> {
        *self.inner.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> CheckInResult<Option<ClientSessionRecord>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn clear(&self) -> CheckInResult<()> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

// Audit sink backends

use super::types::AuditEntry;
use super::AuditError;
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::debug;

/// Trait for append-only audit destinations
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append one entry. Must not truncate or reorder prior entries.
    async fn append(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}

/// File-backed audit sink
///
/// The file is opened once, in append mode, and held for the process
/// lifetime. Each entry is written as one line and flushed before the
/// call returns; the mutex keeps concurrent lines from interleaving.
pub struct FileAuditSink {
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Open (or create) the log file at `path` for appending
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AuditError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .map_err(|e| {
                AuditError::Io(format!(
                    "Failed to open audit log '{}': {}",
                    path.as_ref().display(),
                    e
                ))
            })?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| AuditError::LockPoisoned(e.to_string()))?;

        file.write_all(entry.format_line().as_bytes())
            .map_err(|e| AuditError::Io(format!("Failed to append audit entry: {}", e)))?;
        file.flush()
            .map_err(|e| AuditError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }
}

/// In-memory audit sink
/// Suitable for development and testing
pub struct MemoryAuditSink {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of the recorded entries, in append order
    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }
}

impl Default for MemoryAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut entries = self.entries.write().await;
        debug!("Recording audit entry: {:?}", entry.kind);
        entries.push(entry.clone());
        Ok(())
    }
}

// Audit logging for authentication events
// Produces the append-only security.log trail consumed by monitoring

pub mod logger;
pub mod sink;
pub mod types;

/// Audit errors
#[derive(Debug, Clone)]
pub enum AuditError {
    Io(String),
    LockPoisoned(String),
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::Io(msg) => write!(f, "I/O error: {}", msg),
            AuditError::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for AuditError {}

// Audit logger implementation

use super::sink::AuditSink;
use super::types::{AuditEntry, AuditKind};
use super::AuditError;
use axum::http::HeaderMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Audit logger for recording authentication events
///
/// Entries are appended to the sink before the HTTP response is produced;
/// a failed append is returned to the caller, never swallowed.
#[derive(Clone)]
pub struct AuditLogger {
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    /// Create a new audit logger with the specified sink
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    /// Record one authentication event
    pub async fn record(
        &self,
        kind: AuditKind,
        user: &str,
        ip: &str,
    ) -> Result<(), AuditError> {
        let entry = AuditEntry::new(kind, user, ip);

        info!(
            "Audit: {} user={} ip={}",
            entry.kind.as_str(),
            entry.user,
            entry.ip
        );

        self.sink.append(&entry).await
    }

    /// Resolve the client address for a request: proxy headers first,
    /// then the peer socket address
    pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
        headers
            .get("x-forwarded-for")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(|s| s.to_string())
            .or_else(|| {
                headers
                    .get("x-real-ip")
                    .and_then(|h| h.to_str().ok())
                    .map(|s| s.to_string())
            })
            .or_else(|| peer.map(|addr| addr.ip().to_string()))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

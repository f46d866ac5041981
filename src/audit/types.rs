// Audit log types and the fixed line format

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of auditable authentication events
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditKind {
    Register,
    LoginSuccess,
    LoginFail,
}

impl AuditKind {
    /// Get the canonical string form used on the log line
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditKind::Register => "REGISTER",
            AuditKind::LoginSuccess => "LOGIN_SUCCESS",
            AuditKind::LoginFail => "LOGIN_FAIL",
        }
    }
}

/// A single audit record
///
/// Immutable once written; the trail's total order is append order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    /// Timestamp when the event was recorded
    pub timestamp: DateTime<Utc>,
    /// What happened
    pub kind: AuditKind,
    /// Username the event refers to (may be empty)
    pub user: String,
    /// Source address of the request
    pub ip: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(kind: AuditKind, user: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            user: user.into(),
            ip: ip.into(),
        }
    }

    /// Render the fixed log line, trailing newline included:
    /// `<ISO-8601> | <KIND> | user=<user> | ip=<ip>\n`
    pub fn format_line(&self) -> String {
        format!(
            "{} | {} | user={} | ip={}\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.kind.as_str(),
            self.user,
            self.ip
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_string_forms() {
        assert_eq!(AuditKind::Register.as_str(), "REGISTER");
        assert_eq!(AuditKind::LoginSuccess.as_str(), "LOGIN_SUCCESS");
        assert_eq!(AuditKind::LoginFail.as_str(), "LOGIN_FAIL");
    }

    #[test]
    fn test_format_line() {
        let entry = AuditEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 12).unwrap(),
            kind: AuditKind::LoginFail,
            user: "alice".to_string(),
            ip: "203.0.113.9".to_string(),
        };

        assert_eq!(
            entry.format_line(),
            "2024-05-17T09:30:12.000Z | LOGIN_FAIL | user=alice | ip=203.0.113.9\n"
        );
    }

    #[test]
    fn test_format_line_with_empty_user() {
        let entry = AuditEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 12).unwrap(),
            kind: AuditKind::Register,
            user: String::new(),
            ip: "127.0.0.1".to_string(),
        };

        assert_eq!(
            entry.format_line(),
            "2024-05-17T09:30:12.000Z | REGISTER | user= | ip=127.0.0.1\n"
        );
    }

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now();
        let entry = AuditEntry::new(AuditKind::Register, "alice", "127.0.0.1");
        let after = Utc::now();

        assert!(entry.timestamp >= before && entry.timestamp <= after);
    }
}

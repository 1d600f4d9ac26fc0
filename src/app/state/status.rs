use chrono::{DateTime, Duration, Local};

const STATUS_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    Info,
    Warning,
}

/// A transient footer message, e.g. the outcome of a clipboard copy.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: StatusSeverity,
}

impl StatusMessage {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusSeverity::Info)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusSeverity::Warning)
    }

    fn new(message: impl Into<String>, severity: StatusSeverity) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.timestamp >= Duration::seconds(STATUS_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let status = StatusMessage::info("Copied");
        assert!(!status.is_expired(status.timestamp));
        assert!(status.is_expired(status.timestamp + Duration::seconds(STATUS_TTL_SECS)));
    }
}

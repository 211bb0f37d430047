use std::fmt;
use std::time::{Duration, Instant};

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Danger,
}

/// Short confirmation shown after an operation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Danger,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✓ {}", self.message)
    }
}

/// A notice together with the moment it was shown.
#[derive(Debug, Clone)]
pub struct TransientNotice {
    notice: Notice,
    shown_at: Instant,
}

impl TransientNotice {
    pub fn new(notice: Notice, shown_at: Instant) -> Self {
        Self { notice, shown_at }
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_DURATION
    }
}

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// How long a notification stays visible
pub const TOAST_DURATION_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown by the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Toast {
    pub fn success<S: Into<String>>(message: S, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            raised_at,
        }
    }

    pub fn error<S: Into<String>>(message: S, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            raised_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.raised_at + TimeDelta::milliseconds(TOAST_DURATION_MS)
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}

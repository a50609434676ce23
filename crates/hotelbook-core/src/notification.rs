//! User-facing notices.
//!
//! Page flows report outcomes through a [`Notifier`] instead of blocking alert
//! dialogs. A failed action produces exactly one [`Notice`] whose `kind` tells
//! the failure class apart while `message` keeps the text shown to the user.

use crate::error::HotelbookError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Failure class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Input rejected before any request was sent
    Validation,
    /// Backend unreachable
    Network,
    /// Missing or rejected credentials, or insufficient role
    Auth,
    /// Backend answered with an error
    Server,
    /// Not a failure
    Info,
}

impl NoticeKind {
    pub fn of(error: &HotelbookError) -> Self {
        match error {
            HotelbookError::Validation(_) => NoticeKind::Validation,
            HotelbookError::Network(_) => NoticeKind::Network,
            HotelbookError::Unauthorized(_) => NoticeKind::Auth,
            _ => NoticeKind::Server,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            kind: NoticeKind::Validation,
            message: message.into(),
        }
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            kind: NoticeKind::Auth,
            message: message.into(),
        }
    }

    /// Notice for a failed action.
    ///
    /// Validation errors carry their own user-facing text; every other error
    /// is shown with `fallback` and classified by [`NoticeKind::of`].
    pub fn from_error(error: &HotelbookError, fallback: impl Into<String>) -> Self {
        match error {
            HotelbookError::Validation(validation) => Self::validation(validation.to_string()),
            other => Self {
                level: NoticeLevel::Error,
                kind: NoticeKind::of(other),
                message: fallback.into(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.level, NoticeLevel::Error | NoticeLevel::Warning)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Sink for notices shown to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

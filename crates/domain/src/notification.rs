// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin notification records.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Severity kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Something needs attention soon (e.g. a contract expiring).
    Warning,
    /// Informational message.
    Info,
    /// Something went wrong or lapsed (e.g. a contract expired).
    Error,
    /// A positive event (e.g. an environment became available).
    Success,
}

impl NotificationKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(DomainError::InvalidNotificationKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification shown in the admin area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Message body.
    pub message: String,
    /// Severity kind.
    pub kind: NotificationKind,
    /// Whether the notification has been read. False on creation.
    pub read: bool,
    /// Creation timestamp, stamped once at creation.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_round_trip() {
        for kind in [
            NotificationKind::Warning,
            NotificationKind::Info,
            NotificationKind::Error,
            NotificationKind::Success,
        ] {
            let s = kind.as_str();
            match NotificationKind::from_str(s) {
                Ok(parsed) => assert_eq!(kind, parsed),
                Err(e) => panic!("Failed to parse kind string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_kind_string() {
        assert!(NotificationKind::from_str("debug").is_err());
    }
}

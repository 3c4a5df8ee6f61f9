// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Environment status string is not recognized.
    InvalidEnvironmentStatus(String),
    /// Business status string is not recognized.
    InvalidBusinessStatus(String),
    /// Lease status string is not recognized.
    InvalidLeaseStatus(String),
    /// Notification kind string is not recognized.
    InvalidNotificationKind(String),
    /// Theme string is not recognized.
    InvalidTheme(String),
    /// Role string is not recognized.
    InvalidRole(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEnvironmentStatus(s) => write!(f, "Invalid environment status: {s}"),
            Self::InvalidBusinessStatus(s) => write!(f, "Invalid business status: {s}"),
            Self::InvalidLeaseStatus(s) => write!(f, "Invalid lease status: {s}"),
            Self::InvalidNotificationKind(s) => write!(f, "Invalid notification kind: {s}"),
            Self::InvalidTheme(s) => write!(f, "Invalid theme: {s}"),
            Self::InvalidRole(s) => write!(f, "Invalid role: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}

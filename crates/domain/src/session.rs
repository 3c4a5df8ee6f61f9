// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session user, role, and display-theme types.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role of an authenticated user.
///
/// Roles apply only to admin-area operators. The demo credential flow
/// always assigns `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to the admin area.
    Admin,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// The authenticated admin user attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address as supplied at login.
    pub email: String,
    /// Assigned role.
    pub role: Role,
}

/// Display-theme preference.
///
/// `System` defers to the OS-reported light/dark preference, resolved
/// at the moment the theme is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Always light presentation.
    Light,
    /// Always dark presentation.
    Dark,
    /// Follow the OS preference.
    #[default]
    System,
}

impl Theme {
    /// Returns the string representation of the theme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(DomainError::InvalidTheme(s.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The concrete presentation mode after resolving [`Theme::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light presentation.
    Light,
    /// Dark presentation.
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            let s = theme.as_str();
            match Theme::from_str(s) {
                Ok(parsed) => assert_eq!(theme, parsed),
                Err(e) => panic!("Failed to parse theme string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_theme_defaults_to_system() {
        assert_eq!(Theme::default(), Theme::System);
    }

    #[test]
    fn test_invalid_theme_string() {
        assert!(Theme::from_str("sepia").is_err());
    }

    #[test]
    fn test_invalid_role_string() {
        assert!(Role::from_str("viewer").is_err());
    }
}

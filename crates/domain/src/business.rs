// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tenant business directory records.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Listing status of a tenant business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    /// The business is shown in the public directory.
    Active,
    /// The business is hidden from the public directory.
    Inactive,
}

impl BusinessStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for BusinessStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidBusinessStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tenant's public-facing directory entry.
///
/// `floor` here is a free-text location label (e.g. "Piso 3, Local 301"),
/// distinct from the numeric [`Environment::floor`](crate::Environment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Free-form category label (e.g. "Gastronomía").
    pub category: String,
    /// Single logo image reference.
    pub logo: String,
    /// Ordered image references; may be empty.
    pub images: Vec<String>,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Optional website URL.
    pub website: Option<String>,
    /// Free-text location label within the building.
    pub floor: String,
    /// Free-text opening hours.
    pub schedule: String,
    /// Directory listing status.
    pub status: BusinessStatus,
    /// Creation timestamp, stamped once at creation and never mutated.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [BusinessStatus::Active, BusinessStatus::Inactive] {
            let s = status.as_str();
            match BusinessStatus::from_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!(BusinessStatus::from_str("closed").is_err());
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rentable environment records.
//!
//! An environment is a physical space unit within the building that
//! can be offered for rent. Its availability status is set explicitly
//! by an operator; it is never derived from contract data.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Availability of a rentable environment.
///
/// Status is operator-set, not derived. An environment referenced by
/// an active contract may still read `Available` if nobody updated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentStatus {
    /// The environment is open for new tenants.
    Available,
    /// The environment is currently occupied.
    Rented,
}

impl EnvironmentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Rented => "rented",
        }
    }
}

impl FromStr for EnvironmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "rented" => Ok(Self::Rented),
            _ => Err(DomainError::InvalidEnvironmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EnvironmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rentable physical space unit within the building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Availability status, operator-set.
    pub status: EnvironmentStatus,
    /// Monthly rental price in whole currency units.
    pub rental_price: u32,
    /// Ordered image references; may be empty.
    pub photos: Vec<String>,
    /// Floor area in square meters.
    pub area_m2: f64,
    /// Building floor index.
    pub floor: i32,
}

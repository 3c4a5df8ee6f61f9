// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lease contracts and lifecycle status classification.
//!
//! Contract status is derived from the end date and the current
//! instant; it is never independently settable. The system never
//! advances status on a timer — callers recompute on fetch and on
//! end-date changes, so a stored status can go stale between fetches
//! if wall-clock time crosses a threshold.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Number of days before the end date during which a lease counts as expiring.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

const MS_PER_DAY: i128 = 86_400_000;

/// Lifecycle status of a lease contract, derived from its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    /// More than [`EXPIRING_WINDOW_DAYS`] days remain.
    Active,
    /// The end date is within the closed window of 0 to 30 days away.
    Expiring,
    /// The end date has passed by at least one full day.
    Expired,
}

impl LeaseStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
        }
    }
}

impl FromStr for LeaseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "expiring" => Ok(Self::Expiring),
            "expired" => Ok(Self::Expired),
            _ => Err(DomainError::InvalidLeaseStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a lease by the number of days remaining until its end date.
///
/// The end date is taken as midnight UTC and the remaining time is
/// converted to days with a ceiling: a lease ending in less than one
/// full day still counts as 1 day away, and one whose end passed less
/// than 24 hours ago rounds up to 0 days (expiring, not expired).
///
/// The classification is:
/// - `Expired` if the (ceiled) day count is negative
/// - `Expiring` if it lies in the closed interval `[0, 30]`
/// - `Active` otherwise
///
/// The function is pure and deterministic; `now` is a parameter so
/// callers can inject a fixed instant in tests instead of reading the
/// system clock.
#[must_use]
pub fn classify_lease_status(end_date: Date, now: OffsetDateTime) -> LeaseStatus {
    let end = end_date.midnight().assume_utc();
    let delta_ms = (end - now).whole_milliseconds();
    let days_until_end =
        delta_ms.div_euclid(MS_PER_DAY) + i128::from(delta_ms.rem_euclid(MS_PER_DAY) != 0);

    if days_until_end < 0 {
        LeaseStatus::Expired
    } else if days_until_end <= i128::from(EXPIRING_WINDOW_DAYS) {
        LeaseStatus::Expiring
    } else {
        LeaseStatus::Active
    }
}

/// A lease agreement binding a tenant to an environment for a date
/// range at a monthly rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Plain identifier of the leased environment. Not enforced as a
    /// foreign key; dangling references are possible.
    pub environment_id: String,
    /// Denormalized copy of the environment's name at the time of
    /// creation or edit. Not kept in sync automatically.
    pub environment_name: String,
    /// Tenant display name.
    pub tenant_name: String,
    /// Tenant contact email.
    pub tenant_email: String,
    /// Lease start date.
    pub start_date: Date,
    /// Lease end date.
    pub end_date: Date,
    /// Monthly rent in whole currency units.
    pub monthly_rent: u32,
    /// Derived lifecycle status. Always equals
    /// `classify_lease_status(end_date, now)` as of the last recompute.
    pub status: LeaseStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            LeaseStatus::Active,
            LeaseStatus::Expiring,
            LeaseStatus::Expired,
        ] {
            let s = status.as_str();
            match LeaseStatus::from_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        assert!(LeaseStatus::from_str("terminated").is_err());
    }

    #[test]
    fn test_end_date_today_is_expiring() {
        let now = datetime!(2025-06-15 00:00:00 UTC);
        let status = classify_lease_status(date!(2025 - 06 - 15), now);
        assert_eq!(status, LeaseStatus::Expiring);
    }

    #[test]
    fn test_end_date_earlier_today_rounds_up_to_expiring() {
        // End midnight passed twelve hours ago: ceil(-0.5 days) is 0,
        // which is expiring rather than expired.
        let now = datetime!(2025-06-15 12:00:00 UTC);
        let status = classify_lease_status(date!(2025 - 06 - 15), now);
        assert_eq!(status, LeaseStatus::Expiring);
    }

    #[test]
    fn test_end_date_yesterday_is_expired() {
        let now = datetime!(2025-06-15 00:00:00 UTC);
        let status = classify_lease_status(date!(2025 - 06 - 14), now);
        assert_eq!(status, LeaseStatus::Expired);
    }

    #[test]
    fn test_end_date_over_a_full_day_past_is_expired() {
        let now = datetime!(2025-06-16 00:00:01 UTC);
        let status = classify_lease_status(date!(2025 - 06 - 15), now);
        assert_eq!(status, LeaseStatus::Expired);
    }

    #[test]
    fn test_exactly_thirty_days_is_expiring() {
        let now = datetime!(2025-06-15 00:00:00 UTC);
        let status = classify_lease_status(date!(2025 - 07 - 15), now);
        assert_eq!(status, LeaseStatus::Expiring);
    }

    #[test]
    fn test_thirty_one_days_is_active() {
        let now = datetime!(2025-06-15 00:00:00 UTC);
        let status = classify_lease_status(date!(2025 - 07 - 16), now);
        assert_eq!(status, LeaseStatus::Active);
    }

    #[test]
    fn test_partial_day_counts_as_one_more() {
        // 30.5 days away ceilings to 31, which is active.
        let now = datetime!(2025-06-14 12:00:00 UTC);
        let status = classify_lease_status(date!(2025 - 07 - 15), now);
        assert_eq!(status, LeaseStatus::Active);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let now = datetime!(2025-06-15 08:30:00 UTC);
        let end = date!(2025 - 07 - 01);
        assert_eq!(
            classify_lease_status(end, now),
            classify_lease_status(end, now)
        );
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod business;
mod environment;
mod error;
mod lease;
mod notification;
mod session;

// Re-export public types
pub use business::{Business, BusinessStatus};
pub use environment::{Environment, EnvironmentStatus};
pub use error::DomainError;
pub use lease::{Contract, EXPIRING_WINDOW_DAYS, LeaseStatus, classify_lease_status};
pub use notification::{Notification, NotificationKind};
pub use session::{Role, Theme, ThemeMode, User};

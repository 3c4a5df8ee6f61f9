// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use torre_domain::{Theme, User};

/// The persisted slice of session state.
///
/// Mirrors exactly what the session store must restore on restart:
/// authentication flags and the display-theme preference. The resolved
/// presentation mode is not stored; it is re-derived when the theme is
/// next applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionRecord {
    /// Whether a user is logged in.
    pub is_authenticated: bool,
    /// The logged-in user, present iff `is_authenticated` is true.
    pub user: Option<User>,
    /// Display-theme preference.
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_anonymous_system() {
        let record = SessionRecord::default();
        assert!(!record.is_authenticated);
        assert!(record.user.is_none());
        assert_eq!(record.theme, Theme::System);
    }
}

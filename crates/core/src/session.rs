// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication session and display-theme preference.
//!
//! The session is a two-state machine: Anonymous (no user) and
//! Authenticated (user populated). The theme is orthogonal to the
//! auth states. Both survive an application restart through the
//! persistence backend; every other store re-seeds on start.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, warn};

use torre_domain::{Role, Theme, ThemeMode, User};
use torre_persistence::{SessionBackend, SessionRecord};

use crate::store::Revision;

/// Default simulated latency for [`SessionStore::login`].
pub(crate) const LOGIN_DELAY: Duration = Duration::from_millis(800);

/// Credential check behind the login flow.
///
/// The login interface stays the same whichever implementation is
/// plugged in, so a real validator can replace the demo stub without
/// touching callers.
pub trait CredentialValidator: Send + Sync {
    /// Returns whether the credential pair is accepted.
    fn validate(&self, email: &str, password: &str) -> bool;
}

/// Demo credential validator: accepts any non-empty email/password
/// pair. This is a stub for demonstration only and performs no real
/// credential check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCredentialValidator;

impl CredentialValidator for DemoCredentialValidator {
    fn validate(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && !password.is_empty()
    }
}

/// OS-reported light/dark preference, consulted when resolving
/// [`Theme::System`].
///
/// Resolution happens at the moment a theme is applied and is not
/// re-evaluated if the OS preference changes later; a UI that wants
/// live updates must re-apply the theme from its own OS subscription.
pub trait AppearanceSource: Send + Sync {
    /// Returns whether the OS currently prefers a dark presentation.
    fn prefers_dark(&self) -> bool;
}

/// Stub appearance source reporting a light preference. The embedding
/// presentation layer supplies a platform-backed source.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightAppearance;

impl AppearanceSource for LightAppearance {
    fn prefers_dark(&self) -> bool {
        false
    }
}

/// Authentication state and display-theme preference.
pub struct SessionStore {
    is_authenticated: bool,
    user: Option<User>,
    theme: Theme,
    applied_mode: ThemeMode,
    login_delay: Duration,
    backend: Box<dyn SessionBackend>,
    validator: Box<dyn CredentialValidator>,
    appearance: Box<dyn AppearanceSource>,
    revision: Revision,
}

impl SessionStore {
    /// Creates a session store, restoring any persisted session from
    /// the backend.
    ///
    /// A missing or unreadable record falls back to an anonymous
    /// session with the `System` theme; an unreadable record is logged
    /// and otherwise ignored.
    #[must_use]
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        let record = match backend.load() {
            Ok(Some(record)) => {
                debug!(theme = %record.theme, "Restored persisted session");
                record
            }
            Ok(None) => SessionRecord::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load persisted session; starting fresh");
                SessionRecord::default()
            }
        };

        let appearance: Box<dyn AppearanceSource> = Box::new(LightAppearance);
        let applied_mode = resolve_theme(record.theme, appearance.as_ref());

        Self {
            is_authenticated: record.is_authenticated,
            user: record.user,
            theme: record.theme,
            applied_mode,
            login_delay: LOGIN_DELAY,
            backend,
            validator: Box::new(DemoCredentialValidator),
            appearance,
            revision: Revision::new(),
        }
    }

    /// Overrides the simulated login latency. Tests pass `Duration::ZERO`.
    #[must_use]
    pub const fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Replaces the credential validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Box<dyn CredentialValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Replaces the OS appearance source and re-resolves the applied
    /// presentation mode.
    #[must_use]
    pub fn with_appearance(mut self, appearance: Box<dyn AppearanceSource>) -> Self {
        self.appearance = appearance;
        self.applied_mode = resolve_theme(self.theme, self.appearance.as_ref());
        self
    }

    /// Attempts to log in after a simulated delay.
    ///
    /// Succeeds iff the validator accepts the credentials; on success
    /// the session becomes Authenticated with a fixed admin identity
    /// carrying the supplied email, and the session is persisted.
    /// Never fails with an error; the boolean is the only signal.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        sleep(self.login_delay).await;

        if !self.validator.validate(email, password) {
            debug!("Login rejected");
            return false;
        }

        self.is_authenticated = true;
        self.user = Some(User {
            id: String::from("1"),
            name: String::from("Admin User"),
            email: email.to_string(),
            role: Role::Admin,
        });
        debug!(email, "Login succeeded");
        self.persist();
        self.revision.bump();
        true
    }

    /// Logs out unconditionally, returning the session to Anonymous.
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        debug!("Logged out");
        self.persist();
        self.revision.bump();
    }

    /// Sets the theme preference, persists it, and immediately
    /// resolves the applied presentation mode (`System` is resolved
    /// against the appearance source at this moment only).
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.applied_mode = resolve_theme(theme, self.appearance.as_ref());
        debug!(theme = %theme, mode = ?self.applied_mode, "Theme applied");
        self.persist();
        self.revision.bump();
    }

    /// Returns whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Returns the logged-in user, present iff authenticated.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the theme preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the presentation mode applied at the last theme change.
    #[must_use]
    pub const fn applied_mode(&self) -> ThemeMode {
        self.applied_mode
    }

    /// Subscribes to revision bumps for reactive re-rendering.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Writes the persisted slice of session state to the backend.
    /// Persistence failures are logged, never surfaced: the in-memory
    /// session stays authoritative for the running process.
    fn persist(&self) {
        let record = SessionRecord {
            is_authenticated: self.is_authenticated,
            user: self.user.clone(),
            theme: self.theme,
        };
        if let Err(e) = self.backend.save(&record) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("is_authenticated", &self.is_authenticated)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

fn resolve_theme(theme: Theme, appearance: &dyn AppearanceSource) -> ThemeMode {
    match theme {
        Theme::Light => ThemeMode::Light,
        Theme::Dark => ThemeMode::Dark,
        Theme::System => {
            if appearance.prefers_dark() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use torre_domain::{Role, Theme, ThemeMode};
use torre_persistence::{MemoryBackend, SessionBackend};

use super::helpers::DarkAppearance;
use crate::SessionStore;

fn session_store(backend: MemoryBackend) -> SessionStore {
    SessionStore::new(Box::new(backend)).with_login_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_login_with_empty_email_fails() {
    let mut store = session_store(MemoryBackend::new());

    let ok = store.login("", "x").await;

    assert!(!ok);
    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn test_login_with_empty_password_fails() {
    let mut store = session_store(MemoryBackend::new());

    assert!(!store.login("a@b.com", "").await);
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_login_with_credentials_succeeds() {
    let mut store = session_store(MemoryBackend::new());

    let ok = store.login("a@b.com", "pw").await;

    assert!(ok);
    assert!(store.is_authenticated());
    let user = store.user().expect("user populated after login");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "Admin User");
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn test_logout_returns_to_anonymous() {
    let mut store = session_store(MemoryBackend::new());
    store.login("a@b.com", "pw").await;

    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn test_failed_login_persists_nothing() {
    let backend = MemoryBackend::new();
    let mut store = session_store(backend.clone());

    store.login("", "").await;

    assert!(backend.load().unwrap().is_none());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let backend = MemoryBackend::new();
    let mut store = session_store(backend.clone());
    store.login("a@b.com", "pw").await;
    store.set_theme(Theme::Dark);
    drop(store);

    let restored = session_store(backend);

    assert!(restored.is_authenticated());
    assert_eq!(restored.user().unwrap().email, "a@b.com");
    assert_eq!(restored.theme(), Theme::Dark);
}

#[test]
fn test_fresh_session_defaults_to_anonymous_system() {
    let store = session_store(MemoryBackend::new());

    assert!(!store.is_authenticated());
    assert!(store.user().is_none());
    assert_eq!(store.theme(), Theme::System);
}

#[test]
fn test_set_theme_resolves_explicit_modes() {
    let mut store = session_store(MemoryBackend::new());

    store.set_theme(Theme::Dark);
    assert_eq!(store.applied_mode(), ThemeMode::Dark);

    store.set_theme(Theme::Light);
    assert_eq!(store.applied_mode(), ThemeMode::Light);
}

#[test]
fn test_system_theme_resolves_against_appearance_source() {
    let mut store = session_store(MemoryBackend::new()).with_appearance(Box::new(DarkAppearance));

    store.set_theme(Theme::System);

    assert_eq!(store.theme(), Theme::System);
    assert_eq!(store.applied_mode(), ThemeMode::Dark);
}

#[test]
fn test_set_theme_persists_preference() {
    let backend = MemoryBackend::new();
    let mut store = session_store(backend.clone());

    store.set_theme(Theme::Light);

    let record = backend.load().unwrap().expect("record persisted");
    assert_eq!(record.theme, Theme::Light);
    assert!(!record.is_authenticated);
}

#[tokio::test]
async fn test_subscription_observes_login_and_logout() {
    let mut store = session_store(MemoryBackend::new());
    let mut rx = store.subscribe();

    store.login("a@b.com", "pw").await;
    assert!(rx.has_changed().unwrap());
    rx.mark_unchanged();

    store.logout();
    assert!(rx.has_changed().unwrap());
}

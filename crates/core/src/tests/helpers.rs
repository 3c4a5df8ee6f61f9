// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use time::OffsetDateTime;
use torre_domain::{BusinessStatus, EnvironmentStatus, NotificationKind};

use crate::clock::Clock;
use crate::session::AppearanceSource;
use crate::{
    BusinessDraft, BusinessStore, ContractStore, EnvironmentDraft, EnvironmentStore,
    NotificationDraft, NotificationStore,
};

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Clock whose instant tests can move mid-scenario.
#[derive(Clone)]
pub struct AdjustableClock {
    now: Arc<Mutex<OffsetDateTime>>,
}

impl AdjustableClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: OffsetDateTime) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for AdjustableClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }
}

/// Appearance source reporting a dark OS preference.
pub struct DarkAppearance;

impl AppearanceSource for DarkAppearance {
    fn prefers_dark(&self) -> bool {
        true
    }
}

pub fn environment_store() -> EnvironmentStore {
    EnvironmentStore::new().with_fetch_delay(Duration::ZERO)
}

pub fn business_store(clock: impl Clock + 'static) -> BusinessStore {
    BusinessStore::new()
        .with_fetch_delay(Duration::ZERO)
        .with_clock(Box::new(clock))
}

pub fn contract_store(clock: impl Clock + 'static) -> ContractStore {
    ContractStore::new()
        .with_fetch_delay(Duration::ZERO)
        .with_clock(Box::new(clock))
}

pub fn notification_store(clock: impl Clock + 'static) -> NotificationStore {
    NotificationStore::new()
        .with_fetch_delay(Duration::ZERO)
        .with_clock(Box::new(clock))
}

pub fn sample_environment_draft() -> EnvironmentDraft {
    EnvironmentDraft {
        name: String::from("Rooftop Terrace F"),
        description: String::from("Open-air event space with skyline views."),
        status: EnvironmentStatus::Available,
        rental_price: 2800,
        photos: vec![String::from("https://example.com/terrace.jpg")],
        area_m2: 220.0,
        floor: 20,
    }
}

pub fn sample_business_draft() -> BusinessDraft {
    BusinessDraft {
        name: String::from("Librería El Faro"),
        description: String::from("Librería independiente con eventos culturales semanales."),
        category: String::from("Cultura"),
        logo: String::from("https://example.com/faro-logo.jpg"),
        images: Vec::new(),
        phone: String::from("+52 555 789 0123"),
        email: String::from("contacto@elfaro.mx"),
        website: None,
        floor: String::from("Piso 1, Local 103"),
        schedule: String::from("Lun-Dom: 10:00 AM - 9:00 PM"),
        status: BusinessStatus::Active,
    }
}

pub fn sample_notification_draft() -> NotificationDraft {
    NotificationDraft {
        title: String::from("Maintenance Scheduled"),
        message: String::from("Elevator maintenance on Saturday from 8:00 AM."),
        kind: NotificationKind::Info,
    }
}

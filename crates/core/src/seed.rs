// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed seed datasets.
//!
//! Fetching a store replaces its collection with the corresponding
//! seed set, standing in for a network read against a real backend.
//! Seed ids are small fixed strings; generated ids never collide with
//! them because the id counter is time-seeded.

use time::macros::{date, datetime};
use time::{Duration, OffsetDateTime};
use torre_domain::{
    Business, BusinessStatus, Contract, Environment, EnvironmentStatus, LeaseStatus, Notification,
    NotificationKind,
};

pub(crate) fn environments() -> Vec<Environment> {
    vec![
        Environment {
            id: String::from("1"),
            name: String::from("Executive Suite A"),
            description: String::from(
                "Premium corner office with panoramic city views. Features include private \
                 meeting room, executive bathroom, and smart climate control.",
            ),
            status: EnvironmentStatus::Available,
            rental_price: 4500,
            photos: vec![
                String::from("https://images.unsplash.com/photo-1497366216548-37526070297c?w=800"),
                String::from("https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=800"),
            ],
            area_m2: 120.0,
            floor: 15,
        },
        Environment {
            id: String::from("2"),
            name: String::from("Open Space Office B"),
            description: String::from(
                "Modern collaborative workspace designed for teams of 20-30. Includes breakout \
                 areas and phone booths.",
            ),
            status: EnvironmentStatus::Rented,
            rental_price: 8500,
            photos: vec![
                String::from("https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800"),
                String::from("https://images.unsplash.com/photo-1497215842964-222b430dc094?w=800"),
            ],
            area_m2: 350.0,
            floor: 8,
        },
        Environment {
            id: String::from("3"),
            name: String::from("Creative Studio C"),
            description: String::from(
                "Flexible space ideal for creative agencies. High ceilings, natural light, and \
                 industrial aesthetic.",
            ),
            status: EnvironmentStatus::Available,
            rental_price: 5200,
            photos: vec![
                String::from("https://images.unsplash.com/photo-1524758631624-e2822e304c36?w=800"),
                String::from("https://images.unsplash.com/photo-1527192491265-7e15c55b1ed2?w=800"),
            ],
            area_m2: 180.0,
            floor: 3,
        },
        Environment {
            id: String::from("4"),
            name: String::from("Conference Center D"),
            description: String::from(
                "State-of-the-art conference facility with A/V equipment, video conferencing, \
                 and catering kitchen.",
            ),
            status: EnvironmentStatus::Available,
            rental_price: 3200,
            photos: vec![String::from(
                "https://images.unsplash.com/photo-1431540015161-0bf868a2d407?w=800",
            )],
            area_m2: 90.0,
            floor: 12,
        },
        Environment {
            id: String::from("5"),
            name: String::from("Tech Hub E"),
            description: String::from(
                "Purpose-built for tech companies with dedicated server room, raised flooring, \
                 and redundant power.",
            ),
            status: EnvironmentStatus::Rented,
            rental_price: 9800,
            photos: vec![String::from(
                "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=800",
            )],
            area_m2: 400.0,
            floor: 5,
        },
    ]
}

#[allow(clippy::too_many_lines)]
pub(crate) fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: String::from("1"),
            name: String::from("Tech Solutions MX"),
            description: String::from(
                "Empresa líder en desarrollo de software y soluciones tecnológicas \
                 empresariales. Ofrecemos servicios de consultoría, desarrollo a medida y \
                 soporte técnico especializado.",
            ),
            category: String::from("Tecnología"),
            logo: String::from(
                "https://images.unsplash.com/photo-1560179707-f14e90ef3623?w=200&h=200&fit=crop",
            ),
            images: vec![
                String::from("https://images.unsplash.com/photo-1497366216548-37526070297c?w=800"),
                String::from("https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=800"),
                String::from("https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800"),
            ],
            phone: String::from("+52 555 123 4567"),
            email: String::from("contacto@techsolutions.mx"),
            website: Some(String::from("https://techsolutions.mx")),
            floor: String::from("Piso 3, Local 301"),
            schedule: String::from("Lun-Vie: 9:00 AM - 6:00 PM"),
            status: BusinessStatus::Active,
            created_at: datetime!(2024-01-15 00:00:00 UTC),
        },
        Business {
            id: String::from("2"),
            name: String::from("Café Artesanal Origen"),
            description: String::from(
                "Cafetería especializada en café de especialidad de origen mexicano. Ambiente \
                 acogedor perfecto para reuniones de trabajo o un momento de descanso.",
            ),
            category: String::from("Gastronomía"),
            logo: String::from(
                "https://images.unsplash.com/photo-1559925393-8be0ec4767c8?w=200&h=200&fit=crop",
            ),
            images: vec![
                String::from("https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=800"),
                String::from("https://images.unsplash.com/photo-1493857671505-72967e2e2760?w=800"),
                String::from("https://images.unsplash.com/photo-1445116572660-236099ec97a0?w=800"),
            ],
            phone: String::from("+52 555 234 5678"),
            email: String::from("hola@cafeorigen.mx"),
            website: None,
            floor: String::from("Planta Baja, Local 101"),
            schedule: String::from("Lun-Sáb: 7:00 AM - 8:00 PM"),
            status: BusinessStatus::Active,
            created_at: datetime!(2024-02-01 00:00:00 UTC),
        },
        Business {
            id: String::from("3"),
            name: String::from("Consultores Legales Asociados"),
            description: String::from(
                "Despacho de abogados especializados en derecho corporativo, contratos \
                 comerciales y propiedad intelectual. Más de 20 años de experiencia.",
            ),
            category: String::from("Servicios Legales"),
            logo: String::from(
                "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?w=200&h=200&fit=crop",
            ),
            images: vec![
                String::from("https://images.unsplash.com/photo-1507679799987-c73779587ccf?w=800"),
                String::from("https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=800"),
                String::from("https://images.unsplash.com/photo-1521791136064-7986c2920216?w=800"),
            ],
            phone: String::from("+52 555 345 6789"),
            email: String::from("info@consultoreslegales.mx"),
            website: Some(String::from("https://consultoreslegales.mx")),
            floor: String::from("Piso 5, Local 502"),
            schedule: String::from("Lun-Vie: 9:00 AM - 7:00 PM"),
            status: BusinessStatus::Active,
            created_at: datetime!(2024-01-20 00:00:00 UTC),
        },
        Business {
            id: String::from("4"),
            name: String::from("Fitness Center Pro"),
            description: String::from(
                "Gimnasio completamente equipado con las últimas máquinas y equipos. Clases \
                 grupales, entrenamiento personal y área de spa.",
            ),
            category: String::from("Salud y Bienestar"),
            logo: String::from(
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=200&h=200&fit=crop",
            ),
            images: vec![
                String::from("https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800"),
                String::from("https://images.unsplash.com/photo-1571902943202-507ec2618e8f?w=800"),
                String::from("https://images.unsplash.com/photo-1540497077202-7c8a3999166f?w=800"),
            ],
            phone: String::from("+52 555 456 7890"),
            email: String::from("info@fitnesscenterpro.mx"),
            website: None,
            floor: String::from("Sótano 1"),
            schedule: String::from("Lun-Dom: 5:00 AM - 11:00 PM"),
            status: BusinessStatus::Active,
            created_at: datetime!(2024-03-01 00:00:00 UTC),
        },
        Business {
            id: String::from("5"),
            name: String::from("Clínica Dental Sonrisa"),
            description: String::from(
                "Clínica dental integral con tecnología de vanguardia. Especialistas en \
                 ortodoncia, implantes y estética dental.",
            ),
            category: String::from("Salud"),
            logo: String::from(
                "https://images.unsplash.com/photo-1629909613654-28e377c37b09?w=200&h=200&fit=crop",
            ),
            images: vec![
                String::from("https://images.unsplash.com/photo-1629909613654-28e377c37b09?w=800"),
                String::from("https://images.unsplash.com/photo-1588776814546-1ffcf47267a5?w=800"),
                String::from("https://images.unsplash.com/photo-1606811841689-23dfddce3e95?w=800"),
            ],
            phone: String::from("+52 555 567 8901"),
            email: String::from("citas@clinicasonrisa.mx"),
            website: Some(String::from("https://clinicasonrisa.mx")),
            floor: String::from("Piso 2, Local 205"),
            schedule: String::from("Lun-Sáb: 8:00 AM - 8:00 PM"),
            status: BusinessStatus::Active,
            created_at: datetime!(2024-02-15 00:00:00 UTC),
        },
        Business {
            id: String::from("6"),
            name: String::from("Agencia Creativa Pixel"),
            description: String::from(
                "Agencia de diseño y marketing digital. Branding, desarrollo web, campañas \
                 publicitarias y redes sociales.",
            ),
            category: String::from("Marketing"),
            logo: String::from(
                "https://images.unsplash.com/photo-1572044162444-ad60f128bdea?w=200&h=200&fit=crop",
            ),
            images: vec![
                String::from("https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800"),
                String::from("https://images.unsplash.com/photo-1552664730-d307ca884978?w=800"),
                String::from("https://images.unsplash.com/photo-1553877522-43269d4ea984?w=800"),
            ],
            phone: String::from("+52 555 678 9012"),
            email: String::from("hola@agenciapixel.mx"),
            website: Some(String::from("https://agenciapixel.mx")),
            floor: String::from("Piso 4, Local 401"),
            schedule: String::from("Lun-Vie: 10:00 AM - 7:00 PM"),
            status: BusinessStatus::Inactive,
            created_at: datetime!(2024-01-10 00:00:00 UTC),
        },
    ]
}

/// Seed contracts carry a placeholder status; the contract store
/// recomputes every status against the clock when it loads them.
pub(crate) fn contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: String::from("1"),
            environment_id: String::from("2"),
            environment_name: String::from("Open Space Office B"),
            tenant_name: String::from("TechCorp Inc."),
            tenant_email: String::from("contact@techcorp.com"),
            start_date: date!(2024 - 01 - 15),
            end_date: date!(2026 - 01 - 15),
            monthly_rent: 8500,
            status: LeaseStatus::Active,
        },
        Contract {
            id: String::from("2"),
            environment_id: String::from("5"),
            environment_name: String::from("Tech Hub E"),
            tenant_name: String::from("StartupXYZ"),
            tenant_email: String::from("hello@startupxyz.io"),
            start_date: date!(2024 - 06 - 01),
            end_date: date!(2025 - 02 - 01),
            monthly_rent: 9800,
            status: LeaseStatus::Expiring,
        },
        Contract {
            id: String::from("3"),
            environment_id: String::from("1"),
            environment_name: String::from("Executive Suite A"),
            tenant_name: String::from("LegalFirm LLP"),
            tenant_email: String::from("info@legalfirm.com"),
            start_date: date!(2023 - 03 - 01),
            end_date: date!(2024 - 12 - 31),
            monthly_rent: 4500,
            status: LeaseStatus::Expired,
        },
    ]
}

pub(crate) fn notifications(now: OffsetDateTime) -> Vec<Notification> {
    vec![
        Notification {
            id: String::from("1"),
            title: String::from("Contract Expiring Soon"),
            message: String::from(
                "The contract for Tech Hub E with StartupXYZ expires in 15 days.",
            ),
            kind: NotificationKind::Warning,
            read: false,
            created_at: now,
        },
        Notification {
            id: String::from("2"),
            title: String::from("Contract Expired"),
            message: String::from(
                "The contract for Executive Suite A with LegalFirm LLP has expired.",
            ),
            kind: NotificationKind::Error,
            read: false,
            created_at: now - Duration::days(1),
        },
        Notification {
            id: String::from("3"),
            title: String::from("New Environment Available"),
            message: String::from("Creative Studio C is now available for rent."),
            kind: NotificationKind::Success,
            read: true,
            created_at: now - Duration::days(2),
        },
        Notification {
            id: String::from("4"),
            title: String::from("Rent Payment Received"),
            message: String::from("Monthly rent payment received from TechCorp Inc."),
            kind: NotificationKind::Info,
            read: true,
            created_at: now - Duration::days(3),
        },
    ]
}

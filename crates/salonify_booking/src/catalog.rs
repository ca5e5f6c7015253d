// --- File: crates/salonify_booking/src/catalog.rs ---
//! Fixed service menu and staff roster of the salon.

use crate::models::{Service, Staff};
use once_cell::sync::Lazy;

fn service(id: &str, name: &str, duration: u32, price: u32, description: &str) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        duration,
        price,
        description: description.to_string(),
    }
}

fn staff(id: &str, name: &str, position: &str, avatar: &str, specialties: &[&str]) -> Staff {
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
        avatar: avatar.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    }
}

static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        service(
            "cilt-bakimi",
            "Cilt Bakımı",
            60,
            350,
            "Profesyonel cilt bakımı ve tedavi hizmetleri",
        ),
        service(
            "epilasyon",
            "Epilasyon",
            45,
            250,
            "Modern teknoloji ile kalıcı epilasyon",
        ),
        service(
            "makyaj",
            "Makyaj",
            90,
            400,
            "Özel günler için profesyonel makyaj hizmetleri",
        ),
        service(
            "sac-bakimi",
            "Saç Bakımı",
            60,
            300,
            "Saç bakımı ve şekillendirme",
        ),
        service("masaj", "Masaj", 60, 450, "Rahatlatıcı masaj terapileri"),
    ]
});

static STAFF: Lazy<Vec<Staff>> = Lazy::new(|| {
    vec![
        staff(
            "staff-1",
            "Ayşe Yılmaz",
            "Cilt Bakım Uzmanı",
            "https://randomuser.me/api/portraits/women/1.jpg",
            &["cilt-bakimi", "makyaj"],
        ),
        staff(
            "staff-2",
            "Mehmet Kaya",
            "Masaj Terapisti",
            "https://randomuser.me/api/portraits/men/1.jpg",
            &["masaj"],
        ),
        staff(
            "staff-3",
            "Zeynep Demir",
            "Epilasyon Uzmanı",
            "https://randomuser.me/api/portraits/women/2.jpg",
            &["epilasyon"],
        ),
        staff(
            "staff-4",
            "Elif Şahin",
            "Saç Stilisti",
            "https://randomuser.me/api/portraits/women/3.jpg",
            &["sac-bakimi"],
        ),
    ]
});

pub fn services() -> &'static [Service] {
    &SERVICES
}

pub fn staff_members() -> &'static [Staff] {
    &STAFF
}

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn find_staff(id: &str) -> Option<&'static Staff> {
    STAFF.iter().find(|s| s.id == id)
}

/// Staff who list `service_id` among their specialties.
pub fn staff_for_service(service_id: &str) -> Vec<Staff> {
    STAFF
        .iter()
        .filter(|s| s.specialties.iter().any(|sp| sp == service_id))
        .cloned()
        .collect()
}

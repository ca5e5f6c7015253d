// --- File: crates/salonify_booking/src/storage.rs ---
//! Booking records and the in-memory store behind the site API.

use crate::catalog;
use crate::logic::{calculate_time_slots, is_on_day};
use crate::models::{
    Appointment, AppointmentView, ContactMessage, NewAppointment, NewContactMessage,
    NewsletterEntry, Service, Staff, TimeSlot, User,
};
use async_trait::async_trait;
use chrono::{NaiveDate, SecondsFormat, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Customer name shown for appointments whose user record is gone.
pub const GUEST_NAME: &str = "Misafir";

/// Staff filter value meaning "everyone".
pub const ALL_STAFF: &str = "all";

/// Persistence seam for users, appointments, contact messages and newsletter
/// signups. Operations never fail; input parsing happens before the store.
#[async_trait]
pub trait BookingStorage: Send + Sync {
    async fn create_or_update_user_by_email(&self, name: &str, email: &str, phone: &str) -> User;

    /// Upsert for an OAuth login, keyed by google id then email.
    async fn create_or_update_user_by_google_id(&self, email: &str, google_id: &str) -> User;

    async fn get_user(&self, id: u64) -> Option<User>;

    async fn create_appointment(&self, appointment: NewAppointment) -> Appointment;

    /// `service_id` is accepted for API symmetry and does not change the result.
    async fn get_available_time_slots(
        &self,
        date: NaiveDate,
        service_id: &str,
        staff_id: Option<&str>,
    ) -> Vec<TimeSlot>;

    /// `staff_id` of `None` or `"all"` lists every staff member's appointments.
    async fn get_appointments_by_date(
        &self,
        date: NaiveDate,
        staff_id: Option<&str>,
    ) -> Vec<AppointmentView>;

    async fn create_contact_message(&self, message: NewContactMessage) -> ContactMessage;

    /// Insert-or-fetch by email.
    async fn add_newsletter_email(&self, email: &str) -> NewsletterEntry;

    async fn get_services(&self) -> Vec<Service>;

    async fn get_all_staff(&self) -> Vec<Staff>;

    /// Empty when `service_id` is absent.
    async fn get_staff_by_service(&self, service_id: Option<&str>) -> Vec<Staff>;
}

#[derive(Default)]
struct StorageInner {
    users: BTreeMap<u64, User>,
    appointments: BTreeMap<u64, Appointment>,
    contact_messages: BTreeMap<u64, ContactMessage>,
    newsletter_emails: BTreeMap<u64, NewsletterEntry>,
    // shared by every entity kind
    last_id: u64,
}

impl StorageInner {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn insert_user(&mut self, name: &str, email: &str, phone: &str, google_id: Option<&str>) -> User {
        let user = User {
            id: self.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            google_id: google_id.map(str::to_string),
            gender: None,
            age: None,
            created_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        user
    }
}

/// Process-local store; everything is lost on restart.
pub struct MemStorage {
    inner: RwLock<StorageInner>,
    time_zone: Tz,
}

impl MemStorage {
    /// `time_zone` decides which calendar day and hour an appointment falls on.
    pub fn new(time_zone: Tz) -> Self {
        Self {
            inner: RwLock::new(StorageInner::default()),
            time_zone,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

#[async_trait]
impl BookingStorage for MemStorage {
    async fn create_or_update_user_by_email(&self, name: &str, email: &str, phone: &str) -> User {
        let mut inner = self.inner.write().await;
        if let Some(user) = inner.users.values_mut().find(|u| u.email == email) {
            user.name = name.to_string();
            user.phone = phone.to_string();
            return user.clone();
        }
        let user = inner.insert_user(name, email, phone, None);
        debug!("Created user {} for {}", user.id, email);
        user
    }

    async fn create_or_update_user_by_google_id(&self, email: &str, google_id: &str) -> User {
        let mut inner = self.inner.write().await;
        if let Some(user) = inner
            .users
            .values()
            .find(|u| u.google_id.as_deref() == Some(google_id))
        {
            return user.clone();
        }
        if let Some(user) = inner.users.values_mut().find(|u| u.email == email) {
            user.google_id = Some(google_id.to_string());
            return user.clone();
        }
        let user = inner.insert_user("", email, "", Some(google_id));
        debug!("Created user {} for google account {}", user.id, google_id);
        user
    }

    async fn get_user(&self, id: u64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    async fn create_appointment(&self, appointment: NewAppointment) -> Appointment {
        let mut inner = self.inner.write().await;
        let record = Appointment {
            id: inner.next_id(),
            user_id: appointment.user_id,
            service_type: appointment.service_type,
            appointment_date: appointment.appointment_date,
            staff_id: appointment.staff_id,
            notes: appointment.notes,
            status: appointment.status,
            created_at: Utc::now(),
        };
        inner.appointments.insert(record.id, record.clone());
        record
    }

    async fn get_available_time_slots(
        &self,
        date: NaiveDate,
        _service_id: &str,
        staff_id: Option<&str>,
    ) -> Vec<TimeSlot> {
        let inner = self.inner.read().await;
        calculate_time_slots(inner.appointments.values(), date, staff_id, self.time_zone)
    }

    async fn get_appointments_by_date(
        &self,
        date: NaiveDate,
        staff_id: Option<&str>,
    ) -> Vec<AppointmentView> {
        let staff_filter = staff_id.filter(|s| *s != ALL_STAFF);
        let inner = self.inner.read().await;

        let mut matching: Vec<&Appointment> = inner
            .appointments
            .values()
            .filter(|a| is_on_day(a.appointment_date, date, self.time_zone))
            .filter(|a| match staff_filter {
                Some(staff) => a.staff_id.as_deref() == Some(staff),
                None => true,
            })
            .collect();
        matching.sort_by_key(|a| (a.appointment_date, a.id));

        matching
            .into_iter()
            .map(|a| {
                let user = inner.users.get(&a.user_id);
                let service_name = catalog::find_service(&a.service_type)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| a.service_type.clone());
                let staff_name = a
                    .staff_id
                    .as_deref()
                    .and_then(catalog::find_staff)
                    .map(|s| s.name.clone());

                AppointmentView {
                    id: a.id.to_string(),
                    customer_name: user.map_or_else(|| GUEST_NAME.to_string(), |u| u.name.clone()),
                    customer_email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    customer_phone: user.map(|u| u.phone.clone()).unwrap_or_default(),
                    service_name,
                    service_id: a.service_type.clone(),
                    staff_name,
                    staff_id: a.staff_id.clone(),
                    appointment_date: a
                        .appointment_date
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                    status: a.status,
                    notes: a.notes.clone(),
                }
            })
            .collect()
    }

    async fn create_contact_message(&self, message: NewContactMessage) -> ContactMessage {
        let mut inner = self.inner.write().await;
        let record = ContactMessage {
            id: inner.next_id(),
            name: message.name,
            email: message.email,
            phone: message.phone,
            message: message.message,
            created_at: Utc::now(),
        };
        inner.contact_messages.insert(record.id, record.clone());
        record
    }

    async fn add_newsletter_email(&self, email: &str) -> NewsletterEntry {
        let mut inner = self.inner.write().await;
        if let Some(entry) = inner.newsletter_emails.values().find(|e| e.email == email) {
            return entry.clone();
        }
        let entry = NewsletterEntry {
            id: inner.next_id(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        inner.newsletter_emails.insert(entry.id, entry.clone());
        entry
    }

    async fn get_services(&self) -> Vec<Service> {
        catalog::services().to_vec()
    }

    async fn get_all_staff(&self) -> Vec<Staff> {
        catalog::staff_members().to_vec()
    }

    async fn get_staff_by_service(&self, service_id: Option<&str>) -> Vec<Staff> {
        service_id
            .map(catalog::staff_for_service)
            .unwrap_or_default()
    }
}

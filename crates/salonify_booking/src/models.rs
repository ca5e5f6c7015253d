// --- File: crates/salonify_booking/src/models.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Stored entities ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Lookup key for repeat bookings.
    pub email: String,
    pub phone: String,
    pub google_id: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub user_id: u64,
    /// Service code from the catalog; not checked on write.
    pub service_type: String,
    pub appointment_date: DateTime<Utc>,
    pub staff_id: Option<String>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Input of `BookingStorage::create_appointment`.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: u64,
    pub service_type: String,
    pub appointment_date: DateTime<Utc>,
    pub staff_id: Option<String>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewsletterEntry {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// --- Reference data ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Minutes
    pub duration: u32,
    pub price: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub position: String,
    pub avatar: String,
    /// Service ids this person performs.
    pub specialties: Vec<String>,
}

// --- Read models ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimeSlot {
    #[cfg_attr(feature = "openapi", schema(example = "14:00"))]
    pub time: String,
    pub available: bool,
}

/// An appointment joined with its customer, service and staff for the admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_name: String,
    pub service_id: String,
    pub staff_name: Option<String>,
    pub staff_id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-15T14:00:00.000Z"))]
    pub appointment_date: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

// --- Requests and responses ---
// Required fields are Options so that a missing one yields our own 400.

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotsQuery {
    /// Day in YYYY-MM-DD format (RFC 3339 accepted)
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-15"))]
    pub date: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "masaj"))]
    pub service_id: Option<String>,
    pub staff_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct StaffQuery {
    pub service_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsByDateQuery {
    pub date: Option<String>,
    /// A staff id, or "all"
    pub staff_id: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub notes: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-15T14:00:00Z"))]
    pub appointment_date: Option<String>,
    pub staff_id: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateAppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewsletterRequest {
    pub email: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewsletterResponse {
    pub success: bool,
    pub email: String,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatResponse {
    pub response: String,
}

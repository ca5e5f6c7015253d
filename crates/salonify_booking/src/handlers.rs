// --- File: crates/salonify_booking/src/handlers.rs ---
use crate::chat;
use crate::logic::{
    is_valid_email, parse_appointment_date, parse_day, parse_time_zone, present, validate_contact,
    BookingError,
};
use crate::models::{
    AppointmentStatus, AppointmentView, AppointmentsByDateQuery, AvailableSlotsQuery, ChatRequest,
    ChatResponse, ContactMessage, ContactRequest, CreateAppointmentRequest,
    CreateAppointmentResponse, NewAppointment, NewsletterRequest, NewsletterResponse, Service,
    Staff, StaffQuery, TimeSlot,
};
use crate::storage::BookingStorage;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use chrono_tz::Tz;
use salonify_common::SalonifyError;
use salonify_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared state of the booking routes.
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn BookingStorage>,
    /// Zone in which appointment days and hours are evaluated.
    pub time_zone: Tz,
}

impl BookingState {
    pub fn new(config: Arc<AppConfig>, storage: Arc<dyn BookingStorage>) -> Self {
        let time_zone = parse_time_zone(&config.booking.time_zone);
        Self {
            config,
            storage,
            time_zone,
        }
    }
}

/// Lists the service menu.
pub async fn get_services_handler(State(state): State<Arc<BookingState>>) -> Json<Vec<Service>> {
    Json(state.storage.get_services().await)
}

/// Staff offering the given service; empty without `serviceId`.
pub async fn get_staff_handler(
    State(state): State<Arc<BookingState>>,
    query: Result<Query<StaffQuery>, QueryRejection>,
) -> Result<Json<Vec<Staff>>, SalonifyError> {
    let Query(query) = query?;
    let service_id = present(query.service_id.as_deref());
    Ok(Json(state.storage.get_staff_by_service(service_id).await))
}

pub async fn get_all_staff_handler(State(state): State<Arc<BookingState>>) -> Json<Vec<Staff>> {
    Json(state.storage.get_all_staff().await)
}

/// Hourly availability of a day, optionally for one staff member.
#[axum::debug_handler]
pub async fn get_available_slots_handler(
    State(state): State<Arc<BookingState>>,
    query: Result<Query<AvailableSlotsQuery>, QueryRejection>,
) -> Result<Json<Vec<TimeSlot>>, SalonifyError> {
    let Query(query) = query?;
    let (Some(date), Some(service_id)) = (
        present(query.date.as_deref()),
        present(query.service_id.as_deref()),
    ) else {
        info!("Rejected availability query without date or serviceId");
        return Err(BookingError::MissingFields("date and serviceId are required").into());
    };

    let day = parse_day(date, state.time_zone)?;
    let staff_id = present(query.staff_id.as_deref());
    debug!("Computing slots for {} (service {}, staff {:?})", day, service_id, staff_id);

    let slots = state
        .storage
        .get_available_time_slots(day, service_id, staff_id)
        .await;
    Ok(Json(slots))
}

/// Denormalized appointments of a day. Serves both the admin and the public listing.
pub async fn get_appointments_by_date_handler(
    State(state): State<Arc<BookingState>>,
    query: Result<Query<AppointmentsByDateQuery>, QueryRejection>,
) -> Result<Json<Vec<AppointmentView>>, SalonifyError> {
    let Query(query) = query?;
    let date = present(query.date.as_deref())
        .ok_or(BookingError::MissingFields("date parameter is required"))?;
    let day = parse_day(date, state.time_zone)?;

    let appointments = state
        .storage
        .get_appointments_by_date(day, present(query.staff_id.as_deref()))
        .await;
    Ok(Json(appointments))
}

/// Books a pending appointment, creating or refreshing the customer record.
#[axum::debug_handler]
pub async fn create_appointment_handler(
    State(state): State<Arc<BookingState>>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<Json<CreateAppointmentResponse>, SalonifyError> {
    let Json(payload) = payload?;

    let (Some(name), Some(email), Some(service), Some(date)) = (
        present(payload.name.as_deref()),
        present(payload.email.as_deref()),
        present(payload.service.as_deref()),
        present(payload.appointment_date.as_deref()),
    ) else {
        info!("Rejected appointment request with missing fields");
        return Err(BookingError::MissingFields("Missing required fields").into());
    };
    let appointment_date = parse_appointment_date(date, state.time_zone)?;
    let phone = present(payload.phone.as_deref()).unwrap_or_default();

    let user = state
        .storage
        .create_or_update_user_by_email(name, email, phone)
        .await;

    let appointment = state
        .storage
        .create_appointment(NewAppointment {
            user_id: user.id,
            service_type: service.to_string(),
            appointment_date,
            staff_id: present(payload.staff_id.as_deref()).map(str::to_string),
            notes: present(payload.notes.as_deref()).map(str::to_string),
            status: AppointmentStatus::Pending,
        })
        .await;

    info!(
        "Booked appointment {} for user {} at {}",
        appointment.id, user.id, appointment.appointment_date
    );
    Ok(Json(CreateAppointmentResponse {
        success: true,
        appointment,
    }))
}

pub async fn create_contact_handler(
    State(state): State<Arc<BookingState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactMessage>, SalonifyError> {
    let Json(payload) = payload?;
    let message = validate_contact(payload).inspect_err(|e| info!("Contact form rejected: {}", e))?;
    Ok(Json(state.storage.create_contact_message(message).await))
}

pub async fn subscribe_newsletter_handler(
    State(state): State<Arc<BookingState>>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> Result<Json<NewsletterResponse>, SalonifyError> {
    let Json(payload) = payload?;
    let email = present(payload.email.as_deref())
        .filter(|e| is_valid_email(e))
        .ok_or(BookingError::InvalidEmail)?;

    let entry = state.storage.add_newsletter_email(email).await;
    Ok(Json(NewsletterResponse {
        success: true,
        email: entry.email,
    }))
}

pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, SalonifyError> {
    let Json(payload) = payload?;
    let message = present(payload.message.as_deref())
        .ok_or(BookingError::MissingFields("A valid message is required"))?;
    Ok(Json(ChatResponse {
        response: chat::reply_to(message).to_string(),
    }))
}

// --- File: crates/salonify_booking/src/doc.rs ---

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{
    Appointment, AppointmentStatus, AppointmentView, AppointmentsByDateQuery,
    AvailableSlotsQuery, ChatRequest, ChatResponse, ContactMessage, ContactRequest,
    CreateAppointmentRequest, CreateAppointmentResponse, NewsletterRequest, NewsletterResponse,
    Service, Staff, StaffQuery, TimeSlot,
};

#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "Service menu", body = [Service])
    ),
    tag = "Booking"
)]
fn doc_get_services_handler() {}

#[utoipa::path(
    get,
    path = "/staff",
    params(StaffQuery),
    responses(
        (status = 200, description = "Staff offering the service, empty without serviceId", body = [Staff])
    ),
    tag = "Booking"
)]
fn doc_get_staff_handler() {}

#[utoipa::path(
    get,
    path = "/admin/staff",
    responses(
        (status = 200, description = "All staff", body = [Staff])
    ),
    tag = "Admin"
)]
fn doc_get_all_staff_handler() {}

#[utoipa::path(
    get,
    path = "/appointments/available",
    params(AvailableSlotsQuery),
    responses(
        (status = 200, description = "Hourly slots from 09:00 to 19:00", body = [TimeSlot]),
        (status = 400, description = "Missing or malformed date or serviceId")
    ),
    tag = "Booking"
)]
fn doc_get_available_slots_handler() {}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body(content = CreateAppointmentRequest, example = json!({
        "name": "Ayşe Kaya",
        "email": "ayse@example.com",
        "phone": "05551112233",
        "service": "masaj",
        "appointmentDate": "2025-03-15T14:00:00Z",
        "staffId": "staff-2"
    })),
    responses(
        (status = 200, description = "Appointment recorded as pending", body = CreateAppointmentResponse),
        (status = 400, description = "Missing required fields or malformed appointmentDate")
    ),
    tag = "Booking"
)]
fn doc_create_appointment_handler() {}

#[utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentsByDateQuery),
    responses(
        (status = 200, description = "Appointments of the day", body = [AppointmentView]),
        (status = 400, description = "date parameter is required")
    ),
    tag = "Booking"
)]
fn doc_get_appointments_handler() {}

#[utoipa::path(
    get,
    path = "/admin/appointments",
    params(AppointmentsByDateQuery),
    responses(
        (status = 200, description = "Appointments of the day joined with customer, service and staff", body = [AppointmentView]),
        (status = 400, description = "date parameter is required")
    ),
    tag = "Admin"
)]
fn doc_get_admin_appointments_handler() {}

#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Stored message", body = ContactMessage),
        (status = 400, description = "Invalid contact form data")
    ),
    tag = "Site"
)]
fn doc_create_contact_handler() {}

#[utoipa::path(
    post,
    path = "/newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 200, description = "Subscribed (idempotent)", body = NewsletterResponse),
        (status = 400, description = "Invalid email address")
    ),
    tag = "Site"
)]
fn doc_subscribe_newsletter_handler() {}

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Canned reply", body = ChatResponse),
        (status = 400, description = "Message missing or empty")
    ),
    tag = "Site"
)]
fn doc_chat_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_services_handler,
        doc_get_staff_handler,
        doc_get_all_staff_handler,
        doc_get_available_slots_handler,
        doc_create_appointment_handler,
        doc_get_appointments_handler,
        doc_get_admin_appointments_handler,
        doc_create_contact_handler,
        doc_subscribe_newsletter_handler,
        doc_chat_handler
    ),
    components(
        schemas(
            Appointment,
            AppointmentStatus,
            AppointmentView,
            AvailableSlotsQuery,
            AppointmentsByDateQuery,
            StaffQuery,
            ChatRequest,
            ChatResponse,
            ContactMessage,
            ContactRequest,
            CreateAppointmentRequest,
            CreateAppointmentResponse,
            NewsletterRequest,
            NewsletterResponse,
            Service,
            Staff,
            TimeSlot
        )
    ),
    tags(
        (name = "Booking", description = "Services, staff, availability and appointments"),
        (name = "Admin", description = "Salon back office"),
        (name = "Site", description = "Contact form, newsletter and chat")
    )
)]
pub struct BookingApiDoc;

// --- File: crates/salonify_booking/src/routes.rs ---

use crate::handlers::{
    chat_handler, create_appointment_handler, create_contact_handler, get_all_staff_handler,
    get_appointments_by_date_handler, get_available_slots_handler, get_services_handler,
    get_staff_handler, subscribe_newsletter_handler, BookingState,
};
use axum::{
    routing::{get, post},
    Router,
};
use salonify_common::method_not_allowed;
use std::sync::Arc;

/// Creates the router for the site API. Paths are relative to `/api`.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route(
            "/services",
            get(get_services_handler).fallback(method_not_allowed),
        )
        .route("/staff", get(get_staff_handler).fallback(method_not_allowed))
        .route(
            "/admin/staff",
            get(get_all_staff_handler).fallback(method_not_allowed),
        )
        .route(
            "/appointments/available",
            get(get_available_slots_handler).fallback(method_not_allowed),
        )
        .route(
            "/appointments",
            get(get_appointments_by_date_handler)
                .post(create_appointment_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/admin/appointments",
            get(get_appointments_by_date_handler).fallback(method_not_allowed),
        )
        .route(
            "/contact",
            post(create_contact_handler).fallback(method_not_allowed),
        )
        .route(
            "/newsletter",
            post(subscribe_newsletter_handler).fallback(method_not_allowed),
        )
        .route("/chat", post(chat_handler).fallback(method_not_allowed))
        .with_state(state)
}

// File: crates/salonify_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{BookCalendarRequest, BookCalendarResponse, CalendarSlot};

#[utoipa::path(
    get,
    path = "/calendar/available-slots",
    responses(
        (status = 200, description = "Hourly slots within working hours, marked against the user's calendar", body = [CalendarSlot]),
        (status = 401, description = "Not signed in with Google"),
        (status = 500, description = "Failed to fetch calendar slots")
    ),
    tag = "Google Calendar"
)]
fn doc_calendar_slots_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/appointments",
    request_body(content = BookCalendarRequest, example = json!({
        "date": "2025-03-15T14:00:00+03:00",
        "service": "masaj"
    })),
    responses(
        (status = 200, description = "Event created and appointment confirmed", body = BookCalendarResponse),
        (status = 400, description = "Missing or malformed date or service"),
        (status = 401, description = "Not signed in with Google"),
        (status = 500, description = "Failed to book appointment")
    ),
    tag = "Google Calendar"
)]
fn doc_calendar_book_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_calendar_slots_handler, doc_calendar_book_handler),
    components(schemas(BookCalendarRequest, BookCalendarResponse, CalendarSlot)),
    tags(
        (name = "Google Calendar", description = "Booking against the signed-in user's Google Calendar")
    )
)]
pub struct GcalApiDoc;

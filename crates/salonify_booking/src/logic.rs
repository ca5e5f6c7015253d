// --- File: crates/salonify_booking/src/logic.rs ---
use crate::models::{Appointment, ContactRequest, NewContactMessage, TimeSlot};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use salonify_common::SalonifyError;
use thiserror::Error;
use tracing::warn;

/// First bookable hour of the day.
pub const FIRST_SLOT_HOUR: u32 = 9;
/// Last bookable hour of the day (inclusive).
pub const LAST_SLOT_HOUR: u32 = 19;

const MIN_PHONE_LEN: usize = 10;
const MIN_MESSAGE_LEN: usize = 10;

// --- Error Handling ---
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid contact form data")]
    InvalidContact,
}

impl From<BookingError> for SalonifyError {
    fn from(err: BookingError) -> Self {
        SalonifyError::ValidationError(err.to_string())
    }
}

/// Returns the trimmed value when present and non-blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Label of the slot starting at `hour`, e.g. `09:00`.
pub fn slot_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Resolve an IANA zone name, falling back to UTC.
pub fn parse_time_zone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("Unknown time zone '{}', using UTC", name);
        Tz::UTC
    })
}

/// Parse the `date` query parameter into a calendar day in `tz`.
///
/// Accepts `YYYY-MM-DD` as well as a full RFC 3339 timestamp.
pub fn parse_day(input: &str, tz: Tz) -> Result<NaiveDate, BookingError> {
    let input = input.trim();
    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&tz).date_naive())
        .map_err(|_| BookingError::InvalidDate(input.to_string()))
}

/// Parse the requested start of an appointment.
///
/// Timestamps without an offset are read as local time in `tz`.
pub fn parse_appointment_date(input: &str, tz: Tz) -> Result<DateTime<Utc>, BookingError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(|d| d.and_time(NaiveTime::default()))
        })
        .map_err(|_| BookingError::InvalidDate(input.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| BookingError::InvalidDate(input.to_string()))
}

/// True when `at` falls on `day` as seen in `tz`.
pub fn is_on_day(at: DateTime<Utc>, day: NaiveDate, tz: Tz) -> bool {
    at.with_timezone(&tz).date_naive() == day
}

/// Hourly slots for `day` from 09:00 to 19:00.
///
/// A slot is unavailable when an appointment on that day starts within its
/// hour. With `staff_id` set, only that person's appointments count.
pub fn calculate_time_slots<'a, I>(
    appointments: I,
    day: NaiveDate,
    staff_id: Option<&str>,
    tz: Tz,
) -> Vec<TimeSlot>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let booked_hours: Vec<u32> = appointments
        .into_iter()
        .filter(|a| is_on_day(a.appointment_date, day, tz))
        .filter(|a| match staff_id {
            Some(staff) => a.staff_id.as_deref() == Some(staff),
            None => true,
        })
        .map(|a| a.appointment_date.with_timezone(&tz).hour())
        .collect();

    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| TimeSlot {
            time: slot_label(hour),
            available: !booked_hours.contains(&hour),
        })
        .collect()
}

/// Basic shape check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Validate a contact form submission.
pub fn validate_contact(request: ContactRequest) -> Result<NewContactMessage, BookingError> {
    let name = present(request.name.as_deref()).ok_or(BookingError::InvalidContact)?;
    let email = present(request.email.as_deref()).ok_or(BookingError::InvalidContact)?;
    let phone = present(request.phone.as_deref()).ok_or(BookingError::InvalidContact)?;
    let message = present(request.message.as_deref()).ok_or(BookingError::InvalidContact)?;

    if !is_valid_email(email)
        || phone.chars().count() < MIN_PHONE_LEN
        || message.chars().count() < MIN_MESSAGE_LEN
    {
        return Err(BookingError::InvalidContact);
    }

    Ok(NewContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
    })
}

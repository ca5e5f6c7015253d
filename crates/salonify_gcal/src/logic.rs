// --- File: crates/salonify_gcal/src/logic.rs ---
use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;
use salonify_booking::models::Appointment;
use salonify_common::services::{BoxedError, CalendarEventResult};
use salonify_common::{
    auth_error, config_error, external_service_error, validation_error, SalonifyError,
};
use salonify_config::GcalConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 14;
pub const DEFAULT_WORK_START_HOUR: u32 = 9;
pub const DEFAULT_WORK_END_HOUR: u32 = 20;
pub const MAX_LOOKAHEAD_DAYS: i64 = 366;

/// Length of a calendar booking.
pub const APPOINTMENT_MINUTES: i64 = 60;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum GcalError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("OAuth error: {0}")]
    OAuth(String),
    /// `context` is what the client sees; `source` is only logged.
    #[error("{context}: {source}")]
    Calendar {
        context: &'static str,
        source: BoxedError,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GcalError> for SalonifyError {
    fn from(err: GcalError) -> Self {
        match err {
            GcalError::NotAuthenticated => auth_error("Not authenticated"),
            GcalError::InvalidRequest(msg) => validation_error(msg),
            GcalError::Calendar { context, source } => {
                error!("Google Calendar call failed: {}: {}", context, source);
                external_service_error("Google Calendar", context)
            }
            GcalError::OAuth(msg) => external_service_error("Google OAuth", msg),
            GcalError::Config(msg) => config_error(msg),
        }
    }
}

// --- Data Structures ---

/// Resolved calendar settings with defaults applied.
#[derive(Debug, Clone)]
pub struct CalendarSettings {
    pub calendar_id: String,
    pub time_zone: Tz,
    pub lookahead_days: i64,
    /// First working hour, inclusive.
    pub work_start_hour: u32,
    /// End of the working day, exclusive.
    pub work_end_hour: u32,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            time_zone: Tz::UTC,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            work_start_hour: DEFAULT_WORK_START_HOUR,
            work_end_hour: DEFAULT_WORK_END_HOUR,
        }
    }
}

impl CalendarSettings {
    pub fn from_config(config: &GcalConfig) -> Self {
        let defaults = Self::default();
        let time_zone = match config.time_zone.as_deref() {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                warn!("Unknown gcal time zone '{}', using UTC", name);
                Tz::UTC
            }),
            None => defaults.time_zone,
        };
        Self {
            calendar_id: config
                .calendar_id
                .clone()
                .unwrap_or(defaults.calendar_id),
            time_zone,
            lookahead_days: config.lookahead_days.unwrap_or(defaults.lookahead_days),
            work_start_hour: config.work_start_hour.unwrap_or(defaults.work_start_hour),
            work_end_hour: config.work_end_hour.unwrap_or(defaults.work_end_hour),
        }
    }

    /// Rejects windows and working hours the slot calculation cannot use.
    pub fn validate(&self) -> Result<(), GcalError> {
        if !(1..=MAX_LOOKAHEAD_DAYS).contains(&self.lookahead_days) {
            return Err(GcalError::Config(format!(
                "gcal.lookahead_days must be between 1 and {}, got {}",
                MAX_LOOKAHEAD_DAYS, self.lookahead_days
            )));
        }
        if self.work_start_hour >= self.work_end_hour || self.work_end_hour > 24 {
            return Err(GcalError::Config(format!(
                "gcal working hours must satisfy start < end <= 24, got {}..{}",
                self.work_start_hour, self.work_end_hour
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarSlot {
    /// Slot start, RFC 3339 in the calendar's time zone
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-15T14:00:00+03:00"))]
    pub start: String,
    #[cfg_attr(feature = "openapi", schema(example = "14:00"))]
    pub time: String,
    pub available: bool,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookCalendarRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2025-03-15T14:00:00+03:00"))]
    pub date: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "masaj"))]
    pub service: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookCalendarResponse {
    pub appointment: Appointment,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub calendar_event: CalendarEventResult,
}

#[derive(Deserialize, Debug, Default)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

// --- Slot Calculation ---

/// The first full hour at or after `now`.
pub fn next_full_hour(now: DateTime<Utc>) -> DateTime<Utc> {
    let secs = now.timestamp();
    let rounded = if secs % 3600 == 0 && now.nanosecond() == 0 {
        secs
    } else {
        (secs.div_euclid(3600) + 1) * 3600
    };
    DateTime::from_timestamp(rounded, 0).unwrap_or(now)
}

/// Hourly slots from the next full hour up to `lookahead_days` ahead,
/// limited to working hours in the calendar's time zone.
///
/// A slot is unavailable when it overlaps any busy interval.
pub fn calculate_calendar_slots(
    now: DateTime<Utc>,
    busy_periods: &[(DateTime<Utc>, DateTime<Utc>)],
    settings: &CalendarSettings,
) -> Vec<CalendarSlot> {
    let slot_length = Duration::minutes(APPOINTMENT_MINUTES);
    let window_end = now + Duration::days(settings.lookahead_days);
    let mut slots = Vec::new();
    let mut current = next_full_hour(now);

    while current < window_end {
        let local = current.with_timezone(&settings.time_zone);
        let hour = local.hour();
        if hour >= settings.work_start_hour && hour < settings.work_end_hour {
            let slot_end = current + slot_length;
            let available = !busy_periods
                .iter()
                .any(|(busy_start, busy_end)| current < *busy_end && slot_end > *busy_start);
            slots.push(CalendarSlot {
                start: local.to_rfc3339(),
                time: local.format("%H:%M").to_string(),
                available,
            });
        }
        current += slot_length;
    }
    slots
}

/// Summary of the calendar event written for a booking.
pub fn event_summary(service: &str) -> String {
    format!("Beauty Appointment - {}", service)
}

/// Validate a calendar booking request into its start time and service.
pub fn parse_book_request(
    request: &BookCalendarRequest,
    time_zone: Tz,
) -> Result<(DateTime<Utc>, String), GcalError> {
    let date = request
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    let service = request
        .service
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(date), Some(service)) = (date, service) else {
        return Err(GcalError::InvalidRequest(
            "date and service are required".to_string(),
        ));
    };

    let start = salonify_booking::logic::parse_appointment_date(date, time_zone)
        .map_err(|e| GcalError::InvalidRequest(e.to_string()))?;
    Ok((start, service.to_string()))
}

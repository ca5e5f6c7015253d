// --- File: crates/salonify_gcal/src/service.rs ---
//! Google Calendar implementation of `CalendarProvider`.
//!
//! Every call acts on behalf of the signed-in user, so a hub is built per
//! request from the session's access token.

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use google_calendar3::api::{Event, EventDateTime};
use salonify_common::services::{
    BoxedError, CalendarEvent, CalendarEventResult, CalendarProvider, TokenPair,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::auth::create_calendar_hub;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Calendar client error: {0}")]
    ClientError(String),
}

impl From<GcalServiceError> for BoxedError {
    fn from(err: GcalServiceError) -> Self {
        BoxedError(Box::new(err))
    }
}

fn event_bound(at: Option<EventDateTime>) -> Option<DateTime<Utc>> {
    let at = at?;
    // all-day events only carry a date
    at.date_time
        .or_else(|| at.date.map(|d| d.and_time(NaiveTime::default()).and_utc()))
}

/// Google Calendar service implementation.
#[derive(Default)]
pub struct GoogleCalendarService;

impl GoogleCalendarService {
    pub fn new() -> Self {
        Self
    }

    async fn list_busy_times(
        &self,
        tokens: &TokenPair,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>, GcalServiceError> {
        let hub = create_calendar_hub(tokens.access_token.clone())
            .map_err(|e| GcalServiceError::ClientError(e.to_string()))?;

        let (_, events) = hub
            .events()
            .list(calendar_id)
            .time_min(start_time)
            .time_max(end_time)
            .single_events(true) // Expand recurring events
            .order_by("startTime")
            .doit()
            .await?;

        let mut busy_periods = Vec::new();
        for event in events.items.unwrap_or_default() {
            if event.status.as_deref() == Some("cancelled") {
                continue;
            }
            // transparent events do not block time
            if event.transparency.as_deref() == Some("transparent") {
                continue;
            }
            match (event_bound(event.start), event_bound(event.end)) {
                (Some(start), Some(end)) => busy_periods.push((start, end)),
                _ => info!(
                    "Skipping event {:?} with missing start/end",
                    event.id.as_deref().unwrap_or_default()
                ),
            }
        }
        busy_periods.sort_by_key(|k| k.0);
        debug!(
            "Found {} busy periods in {} between {} and {}",
            busy_periods.len(),
            calendar_id,
            start_time,
            end_time
        );
        Ok(busy_periods)
    }

    async fn insert_event(
        &self,
        tokens: &TokenPair,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> Result<CalendarEventResult, GcalServiceError> {
        let hub = create_calendar_hub(tokens.access_token.clone())
            .map_err(|e| GcalServiceError::ClientError(e.to_string()))?;

        let new_event = Event {
            summary: Some(event.summary),
            description: event.description,
            start: Some(EventDateTime {
                date_time: Some(event.start_time),
                time_zone: Some("UTC".to_string()),
                ..Default::default()
            }),
            end: Some(EventDateTime {
                date_time: Some(event.end_time),
                time_zone: Some("UTC".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let (_, created_event) = hub
            .events()
            .insert(new_event, calendar_id)
            .doit()
            .await?;

        info!("Created calendar event {:?}", created_event.id);
        Ok(CalendarEventResult {
            event_id: created_event.id,
            status: created_event
                .status
                .unwrap_or_else(|| "confirmed".to_string()),
            html_link: created_event.html_link,
        })
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarService {
    async fn get_busy_times(
        &self,
        tokens: &TokenPair,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>, BoxedError> {
        Ok(self
            .list_busy_times(tokens, calendar_id, start_time, end_time)
            .await?)
    }

    async fn create_event(
        &self,
        tokens: &TokenPair,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> Result<CalendarEventResult, BoxedError> {
        Ok(self.insert_event(tokens, calendar_id, event).await?)
    }
}

// File: crates/salonify_gcal/src/handlers.rs
use crate::logic::{
    calculate_calendar_slots, event_summary, parse_book_request, BookCalendarRequest,
    BookCalendarResponse, CalendarSettings, CalendarSlot, GcalError, OAuthCallbackQuery,
    APPOINTMENT_MINUTES,
};
use crate::session::{SessionData, SessionStore};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::{Json, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use salonify_booking::models::{AppointmentStatus, NewAppointment};
use salonify_booking::storage::BookingStorage;
use salonify_common::services::{CalendarEvent, CalendarProvider, OAuthProvider, TokenPair};
use salonify_common::SalonifyError;
use salonify_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

pub const LOGIN_FAILED_REDIRECT: &str = "/login?error=auth_failed";
pub const LOGIN_SUCCESS_REDIRECT: &str = "/";

// Define shared state needed by the Google handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    pub settings: CalendarSettings,
    pub storage: Arc<dyn BookingStorage>,
    pub sessions: Arc<SessionStore>,
    pub oauth: Arc<dyn OAuthProvider>,
    pub calendar: Arc<dyn CalendarProvider>,
}

impl GcalState {
    fn session_id(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.config.session.cookie_name)
            .map(|c| c.value().to_string())
    }

    async fn load_session(&self, jar: &CookieJar) -> Option<(String, SessionData)> {
        let id = self.session_id(jar)?;
        let data = self.sessions.get(&id).await?;
        Some((id, data))
    }

    /// Cookie carrying the session id.
    fn session_cookie(&self, id: String) -> Cookie<'static> {
        Cookie::build((self.config.session.cookie_name.clone(), id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.session.cookie_secure)
            .build()
    }

    async fn session_tokens(&self, jar: &CookieJar) -> Result<(SessionData, TokenPair), GcalError> {
        let (_, session) = self
            .load_session(jar)
            .await
            .ok_or(GcalError::NotAuthenticated)?;
        let tokens = session.tokens.clone().ok_or(GcalError::NotAuthenticated)?;
        Ok((session, tokens))
    }
}

/// Starts Google sign-in: remembers a CSRF state in the session and redirects
/// to the consent screen.
pub async fn google_auth_handler(
    State(state): State<Arc<GcalState>>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let request = state.oauth.authorize_url();

    let existing = state.load_session(&jar).await;
    let (id, mut session) = match existing {
        Some((id, data)) => (Some(id), data),
        None => (None, SessionData::default()),
    };
    session.csrf_state = Some(request.csrf_state);
    let id = state.sessions.save(id.as_deref(), session).await;

    (jar.add(state.session_cookie(id)), Redirect::to(&request.url))
}

/// Completes Google sign-in. Redirects to `/` on success and to the login page
/// with an error flag on any failure.
pub async fn google_callback_handler(
    State(state): State<Arc<GcalState>>,
    jar: CookieJar,
    query: Result<Query<OAuthCallbackQuery>, QueryRejection>,
) -> (CookieJar, Redirect) {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    match complete_login(&state, &jar, query).await {
        Ok(id) => (
            jar.add(state.session_cookie(id)),
            Redirect::to(LOGIN_SUCCESS_REDIRECT),
        ),
        Err(e) => {
            warn!("Google sign-in failed: {}", e);
            (jar, Redirect::to(LOGIN_FAILED_REDIRECT))
        }
    }
}

async fn complete_login(
    state: &GcalState,
    jar: &CookieJar,
    query: OAuthCallbackQuery,
) -> Result<String, GcalError> {
    if let Some(error) = query.error {
        return Err(GcalError::OAuth(format!("consent denied: {}", error)));
    }
    let (old_id, session) = state
        .load_session(jar)
        .await
        .ok_or_else(|| GcalError::OAuth("no session for callback".to_string()))?;

    let expected = session.csrf_state.as_deref();
    if expected.is_none() || query.state.as_deref() != expected {
        return Err(GcalError::OAuth("CSRF state mismatch".to_string()));
    }
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| GcalError::OAuth("missing authorization code".to_string()))?;

    let tokens = state
        .oauth
        .exchange_code(&code)
        .await
        .map_err(|e| GcalError::OAuth(e.to_string()))?;
    let identity = state
        .oauth
        .token_info(&tokens.access_token)
        .await
        .map_err(|e| GcalError::OAuth(e.to_string()))?;
    let email = identity
        .email
        .ok_or_else(|| GcalError::OAuth("token carries no email".to_string()))?;

    let user = state
        .storage
        .create_or_update_user_by_google_id(&email, &identity.subject)
        .await;
    info!("User {} signed in with Google", user.id);

    // fresh id after sign-in
    state.sessions.remove(&old_id).await;
    let id = state
        .sessions
        .create(SessionData {
            tokens: Some(tokens),
            user_id: Some(user.id),
            csrf_state: None,
        })
        .await;
    Ok(id)
}

/// Hourly slots over the lookahead window, marked against the user's calendar.
#[axum::debug_handler]
pub async fn calendar_slots_handler(
    State(state): State<Arc<GcalState>>,
    jar: CookieJar,
) -> Result<Json<Vec<CalendarSlot>>, SalonifyError> {
    let (_, tokens) = state.session_tokens(&jar).await?;

    let now = Utc::now();
    let window_end = now + Duration::days(state.settings.lookahead_days);
    let busy = state
        .calendar
        .get_busy_times(&tokens, &state.settings.calendar_id, now, window_end)
        .await
        .map_err(|source| GcalError::Calendar {
            context: "Failed to fetch calendar slots",
            source,
        })?;

    Ok(Json(calculate_calendar_slots(now, &busy, &state.settings)))
}

/// Writes a one-hour event to the user's calendar and records a confirmed appointment.
#[axum::debug_handler]
pub async fn calendar_book_handler(
    State(state): State<Arc<GcalState>>,
    jar: CookieJar,
    payload: Result<Json<BookCalendarRequest>, JsonRejection>,
) -> Result<Json<BookCalendarResponse>, SalonifyError> {
    let (session, tokens) = state.session_tokens(&jar).await?;
    let user_id = session.user_id.ok_or(GcalError::NotAuthenticated)?;

    let Json(payload) = payload?;
    let (start_time, service) = parse_book_request(&payload, state.settings.time_zone)?;

    let event = CalendarEvent {
        start_time,
        end_time: start_time + Duration::minutes(APPOINTMENT_MINUTES),
        summary: event_summary(&service),
        description: Some(format!("Service: {}", service)),
    };
    let calendar_event = state
        .calendar
        .create_event(&tokens, &state.settings.calendar_id, event)
        .await
        .map_err(|source| GcalError::Calendar {
            context: "Failed to book appointment",
            source,
        })?;

    // no reconciliation with the calendar if this store write is lost
    let appointment = state
        .storage
        .create_appointment(NewAppointment {
            user_id,
            service_type: service,
            appointment_date: start_time,
            staff_id: None,
            notes: None,
            status: AppointmentStatus::Confirmed,
        })
        .await;

    info!(
        "Booked calendar appointment {} for user {}",
        appointment.id, user_id
    );
    Ok(Json(BookCalendarResponse {
        appointment,
        calendar_event,
    }))
}

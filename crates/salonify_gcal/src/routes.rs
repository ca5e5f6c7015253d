// --- File: crates/salonify_gcal/src/routes.rs ---

use crate::auth::GoogleOAuthProvider;
use crate::handlers::{
    calendar_book_handler, calendar_slots_handler, google_auth_handler, google_callback_handler,
    GcalState,
};
use crate::logic::{CalendarSettings, GcalError};
use crate::service::GoogleCalendarService;
use crate::session::SessionStore;
use axum::{
    routing::{get, post},
    Router,
};
use salonify_booking::storage::BookingStorage;
use salonify_common::method_not_allowed;
use salonify_config::AppConfig;
use std::sync::Arc;

/// Builds the state backed by Google's OAuth and Calendar endpoints.
pub fn create_gcal_state(
    config: Arc<AppConfig>,
    storage: Arc<dyn BookingStorage>,
    sessions: Arc<SessionStore>,
) -> Result<Arc<GcalState>, GcalError> {
    let gcal_config = config
        .gcal
        .as_ref()
        .ok_or_else(|| GcalError::Config("gcal section missing".to_string()))?;

    let settings = CalendarSettings::from_config(gcal_config);
    settings.validate()?;
    let oauth = Arc::new(GoogleOAuthProvider::new(gcal_config)?);

    Ok(Arc::new(GcalState {
        config,
        settings,
        storage,
        sessions,
        oauth,
        calendar: Arc::new(GoogleCalendarService::new()),
    }))
}

/// Sign-in routes, relative to `/auth`.
pub fn auth_routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route(
            "/google",
            get(google_auth_handler).fallback(method_not_allowed),
        )
        .route(
            "/google/callback",
            get(google_callback_handler).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// Calendar-backed booking routes, relative to `/api`.
pub fn api_routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route(
            "/calendar/available-slots",
            get(calendar_slots_handler).fallback(method_not_allowed),
        )
        .route(
            "/calendar/appointments",
            post(calendar_book_handler).fallback(method_not_allowed),
        )
        .with_state(state)
}

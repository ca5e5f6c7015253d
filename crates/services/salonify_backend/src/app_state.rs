// --- File: crates/services/salonify_backend/src/app_state.rs ---
use salonify_booking::handlers::BookingState;
use salonify_booking::logic::parse_time_zone;
use salonify_booking::storage::{BookingStorage, MemStorage};
use salonify_config::AppConfig;
use std::sync::Arc;

#[cfg(feature = "gcal")]
use {
    salonify_gcal::{handlers::GcalState, routes::create_gcal_state, session::SessionStore},
    salonify_common::log_error,
    tokio::task::JoinHandle,
    tracing::info,
};

/// Application state shared by every router, built once at startup.
///
/// The booking routes and the calendar routes write to the same store, so
/// appointments booked through Google show up in the admin listing.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn BookingStorage>,
    pub booking: Arc<BookingState>,

    /// Present when `use_gcal` is set and the `gcal` section is usable.
    #[cfg(feature = "gcal")]
    pub gcal: Option<Arc<GcalState>>,
}

impl AppState {
    /// State backed by a fresh in-memory store in the configured booking zone.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let time_zone = parse_time_zone(&config.booking.time_zone);
        let storage: Arc<dyn BookingStorage> = Arc::new(MemStorage::new(time_zone));
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: Arc<AppConfig>, storage: Arc<dyn BookingStorage>) -> Self {
        let booking = Arc::new(BookingState::new(config.clone(), storage.clone()));

        #[cfg(feature = "gcal")]
        let gcal = if config.use_gcal {
            build_gcal_state(&config, storage.clone())
        } else {
            None
        };

        Self {
            config,
            storage,
            booking,
            #[cfg(feature = "gcal")]
            gcal,
        }
    }

    /// Starts the periodic cleanup of expired sessions.
    ///
    /// Returns `None` when the calendar routes are disabled, as there are no
    /// sessions to clean up then.
    #[cfg(feature = "gcal")]
    pub fn spawn_session_pruner(&self) -> Option<JoinHandle<()>> {
        let gcal = self.gcal.as_ref()?;
        let hours = self.config.session.prune_interval_hours.max(1);
        let every = std::time::Duration::from_secs(hours * 60 * 60);
        info!("Pruning expired sessions every {} hours", hours);
        Some(gcal.sessions.spawn_pruner(every))
    }
}

#[cfg(feature = "gcal")]
fn build_gcal_state(
    config: &Arc<AppConfig>,
    storage: Arc<dyn BookingStorage>,
) -> Option<Arc<GcalState>> {
    let ttl = chrono::Duration::hours(config.session.ttl_hours);
    let sessions = Arc::new(SessionStore::new(ttl));

    match create_gcal_state(config.clone(), storage, sessions) {
        Ok(state) => {
            info!(
                "Google sign-in enabled, booking into calendar '{}'",
                state.settings.calendar_id
            );
            Some(state)
        }
        Err(e) => {
            log_error(e, "Google Calendar routes disabled");
            None
        }
    }
}

// --- File: crates/salonify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built front-end; served as fallback when set.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: None,
        }
    }
}

// --- Booking Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// IANA zone used to decide the calendar day and hour of an appointment.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
        }
    }
}

// --- Session Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
    #[serde(default = "default_prune_interval_hours")]
    pub prune_interval_hours: u64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Only send the session cookie over HTTPS.
    #[serde(default)]
    pub cookie_secure: bool,
}

fn default_ttl_hours() -> i64 {
    24
}

fn default_prune_interval_hours() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "salonify.sid".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            prune_interval_hours: default_prune_interval_hours(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

// --- Google Calendar Config ---
// OAuth client credentials. The secret is normally "secret_from_env" and
// resolved from GCAL_CLIENT_SECRET at load time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub calendar_id: Option<String>,
    pub time_zone: Option<String>,
    /// Size of the window scanned for busy events, in days.
    pub lookahead_days: Option<i64>,
    pub work_start_hour: Option<u32>, // inclusive
    pub work_end_hour: Option<u32>,   // exclusive
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub session: SessionConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
}

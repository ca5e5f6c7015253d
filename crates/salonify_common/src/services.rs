// --- File: crates/salonify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The calendar-backed booking path talks to an OAuth provider and a calendar
//! provider through these traits, so handlers can be exercised without a
//! network.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

/// A wrapper error type for failures coming out of a provider implementation.
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl BoxedError {
    pub fn msg<T: fmt::Display>(message: T) -> Self {
        BoxedError(message.to_string().into())
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Access and refresh token obtained from the OAuth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Identity behind an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Stable account identifier at the provider.
    pub subject: String,
    pub email: Option<String>,
}

/// Where to send the user for consent, and the CSRF state to expect back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub csrf_state: String,
}

/// Authorization-code flow of an OAuth2 identity provider.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Build the consent screen URL with a fresh CSRF state.
    fn authorize_url(&self) -> AuthorizationRequest;

    /// Exchange an authorization code for tokens.
    async fn exchange_code(&self, code: &str) -> Result<TokenPair, BoxedError>;

    /// Resolve the account an access token belongs to.
    async fn token_info(&self, access_token: &str) -> Result<TokenInfo, BoxedError>;
}

/// An event to be written to the external calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub summary: String,
    pub description: Option<String>,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventResult {
    pub event_id: Option<String>,
    pub status: String,
    pub html_link: Option<String>,
}

/// Calendar operations performed on behalf of a signed-in user.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Busy intervals of the calendar between `start_time` and `end_time`, sorted by start.
    async fn get_busy_times(
        &self,
        tokens: &TokenPair,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>, BoxedError>;

    /// Insert an event into the calendar.
    async fn create_event(
        &self,
        tokens: &TokenPair,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> Result<CalendarEventResult, BoxedError>;
}

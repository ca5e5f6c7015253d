// File: crates/salonify_gcal/src/auth.rs
use async_trait::async_trait;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    CalendarHub,
};
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use salonify_common::services::{
    AuthorizationRequest, BoxedError, OAuthProvider, TokenInfo, TokenPair,
};
use salonify_config::GcalConfig;
use serde::Deserialize;
use tracing::debug;

use crate::logic::GcalError;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_TOKEN_INFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

pub const SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/userinfo.profile",
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/calendar",
];

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

type GoogleClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Calendar client acting with a user's access token.
pub fn create_calendar_hub(access_token: String) -> Result<HubType, BoxedError> {
    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(BoxedError::msg)?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, access_token))
}

#[derive(Deserialize, Debug)]
struct TokenInfoResponse {
    sub: String,
    email: Option<String>,
}

/// Google's authorization-code flow, with offline access for a refresh token.
pub struct GoogleOAuthProvider {
    client: GoogleClient,
    http: reqwest::Client,
}

impl GoogleOAuthProvider {
    pub fn new(config: &GcalConfig) -> Result<Self, GcalError> {
        let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
            .map_err(|e| GcalError::Config(format!("Invalid auth URL: {}", e)))?;
        let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
            .map_err(|e| GcalError::Config(format!("Invalid token URL: {}", e)))?;
        let redirect_url = RedirectUrl::new(config.redirect_uri.clone())
            .map_err(|e| GcalError::Config(format!("Invalid gcal.redirect_uri: {}", e)))?;

        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url);

        // the token endpoint must not be followed through redirects
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GcalError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, http })
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthProvider {
    fn authorize_url(&self) -> AuthorizationRequest {
        let (url, csrf_token) = SCOPES
            .iter()
            .fold(
                self.client.authorize_url(CsrfToken::new_random),
                |request, scope| request.add_scope(Scope::new(scope.to_string())),
            )
            .add_extra_param("access_type", "offline")
            .add_extra_param("prompt", "consent")
            .url();

        AuthorizationRequest {
            url: url.to_string(),
            csrf_state: csrf_token.secret().to_string(),
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenPair, BoxedError> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| BoxedError::msg(format!("Token exchange failed: {}", e)))?;

        debug!("Exchanged authorization code for tokens");
        Ok(TokenPair {
            access_token: token.access_token().secret().to_string(),
            refresh_token: token.refresh_token().map(|t| t.secret().to_string()),
        })
    }

    async fn token_info(&self, access_token: &str) -> Result<TokenInfo, BoxedError> {
        let info: TokenInfoResponse = self
            .http
            .get(GOOGLE_TOKEN_INFO_URL)
            .query(&[("access_token", access_token)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(BoxedError::msg)?
            .json()
            .await
            .map_err(BoxedError::msg)?;

        Ok(TokenInfo {
            subject: info.sub,
            email: info.email,
        })
    }
}

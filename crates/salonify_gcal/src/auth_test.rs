#[cfg(test)]
mod tests {
    use crate::auth::{GoogleOAuthProvider, GOOGLE_AUTH_URL, SCOPES};
    use crate::logic::GcalError;
    use salonify_common::services::OAuthProvider;
    use salonify_config::GcalConfig;
    use std::collections::HashMap;

    fn test_config(redirect_uri: &str) -> GcalConfig {
        GcalConfig {
            client_id: "test-client-id".into(),
            client_secret: "test-client-secret".into(),
            redirect_uri: redirect_uri.into(),
            calendar_id: None,
            time_zone: None,
            lookahead_days: None,
            work_start_hour: None,
            work_end_hour: None,
        }
    }

    fn query_of(url: &str) -> HashMap<String, String> {
        reqwest::Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_authorize_url() {
        let provider =
            GoogleOAuthProvider::new(&test_config("http://localhost:5000/auth/google/callback"))
                .unwrap();
        let request = provider.authorize_url();

        assert!(request.url.starts_with(GOOGLE_AUTH_URL));
        let query = query_of(&request.url);
        assert_eq!(query["client_id"], "test-client-id");
        assert_eq!(query["response_type"], "code");
        assert_eq!(
            query["redirect_uri"],
            "http://localhost:5000/auth/google/callback"
        );
        assert_eq!(query["access_type"], "offline");
        assert_eq!(query["prompt"], "consent");
        assert_eq!(query["state"], request.csrf_state);

        let scopes: Vec<&str> = query["scope"].split(' ').collect();
        assert_eq!(scopes, SCOPES.to_vec());
    }

    #[test]
    fn test_fresh_state_per_request() {
        let provider =
            GoogleOAuthProvider::new(&test_config("http://localhost:5000/auth/google/callback"))
                .unwrap();
        let first = provider.authorize_url();
        let second = provider.authorize_url();
        assert!(!first.csrf_state.is_empty());
        assert_ne!(first.csrf_state, second.csrf_state);
    }

    #[test]
    fn test_invalid_redirect_uri() {
        let result = GoogleOAuthProvider::new(&test_config("not a url"));
        assert!(matches!(result, Err(GcalError::Config(_))));
    }
}

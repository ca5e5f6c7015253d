#[cfg(test)]
mod tests {
    use crate::{inject_env_secrets, load_config_from, SECRET_MARKER};
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_defaults_when_no_files_exist() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path(), "debug", "SALONIFY_TEST_EMPTY").unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.booking.time_zone, "UTC");
        assert_eq!(config.session.ttl_hours, 24);
        assert_eq!(config.session.cookie_name, "salonify.sid");
        assert!(!config.use_gcal);
        assert!(config.gcal.is_none());
    }

    #[test]
    fn test_run_env_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[server]
host = "127.0.0.1"
port = 8080

[booking]
time_zone = "Europe/Istanbul"
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("prod.toml"),
            r#"
[server]
host = "0.0.0.0"
port = 9090
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path(), "prod", "SALONIFY_TEST_LAYERS").unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.booking.time_zone, "Europe/Istanbul");
    }

    #[test]
    fn test_gcal_section_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
use_gcal = true

[gcal]
client_id = "client"
client_secret = "plain-secret"
redirect_uri = "http://localhost:5000/auth/google/callback"
lookahead_days = 7
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path(), "debug", "SALONIFY_TEST_GCAL").unwrap();
        let gcal = config.gcal.expect("gcal section");

        assert!(config.use_gcal);
        assert_eq!(gcal.client_id, "client");
        assert_eq!(gcal.client_secret, "plain-secret");
        assert_eq!(gcal.lookahead_days, Some(7));
        assert_eq!(gcal.calendar_id, None);
    }

    #[test]
    fn test_secret_marker_is_replaced_from_env() {
        std::env::set_var("SALONIFY_MARKER_TEST_TOKEN", "resolved");
        let mut value = json!({
            "salonify_marker_test": { "token": SECRET_MARKER, "other": "kept" }
        });

        inject_env_secrets(&mut value);

        assert_eq!(value["salonify_marker_test"]["token"], "resolved");
        assert_eq!(value["salonify_marker_test"]["other"], "kept");
    }

    #[test]
    fn test_secret_marker_kept_when_env_missing() {
        let mut value = json!({ "missing_marker": { "key": SECRET_MARKER } });

        inject_env_secrets(&mut value);

        assert_eq!(value["missing_marker"]["key"], SECRET_MARKER);
    }
}

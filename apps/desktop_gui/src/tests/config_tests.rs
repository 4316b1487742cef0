use super::{parse_http_url, StartupConfig};
use clap::Parser;

#[test]
fn defaults_point_at_the_fixed_endpoints() {
    let config = StartupConfig::parse_from(["records_desk"]);

    assert_eq!(config.records_url, shared::RECORDS_URL);
    assert_eq!(config.avatar_url, shared::AVATAR_URL);
    assert_eq!(config.log_filter, "info");
    config.validate().expect("defaults are valid");
}

#[test]
fn flags_override_defaults() {
    let config = StartupConfig::parse_from([
        "records_desk",
        "--records-url",
        "http://127.0.0.1:9000/records",
        "--log-filter",
        "debug",
        "--width",
        "800",
    ]);

    assert_eq!(config.records_url, "http://127.0.0.1:9000/records");
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.width, 800.0);
    config.validate().expect("overrides are valid");
}

#[test]
fn rejects_non_http_urls() {
    let err = parse_http_url("--records-url", "file:///tmp/records.json").expect_err("file url");
    assert!(err.to_string().contains("http or https"));

    assert!(parse_http_url("--avatar-url", "not a url").is_err());
}

#[test]
fn rejects_degenerate_window_size() {
    let config = StartupConfig::parse_from(["records_desk", "--height", "0"]);
    assert!(config.validate().is_err());
}

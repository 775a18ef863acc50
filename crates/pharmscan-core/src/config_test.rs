use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_on_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.fetch_user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(cfg.page_load_timeout_secs, 30);
    assert_eq!(cfg.probe_timeout_secs, 15);
    assert_eq!(cfg.max_results_per_source, 3);
    assert!(cfg.chrome_binary.is_none());
    assert_eq!(cfg.rate_limit_max_requests, 30);
    assert_eq!(cfg.rate_limit_window_secs, 60);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("PHARMSCAN_ENV", "production");
    map.insert("PHARMSCAN_BIND_ADDR", "127.0.0.1:8080");
    map.insert("PHARMSCAN_PROBE_TIMEOUT_SECS", "5");
    map.insert("PHARMSCAN_MAX_RESULTS_PER_SOURCE", "5");
    map.insert("PHARMSCAN_CHROME_BINARY", "/usr/bin/chromium");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should parse");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.probe_timeout_secs, 5);
    assert_eq!(cfg.max_results_per_source, 5);
    assert_eq!(
        cfg.chrome_binary.as_deref(),
        Some(std::path::Path::new("/usr/bin/chromium"))
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("PHARMSCAN_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMSCAN_BIND_ADDR"),
        "expected InvalidEnvVar(PHARMSCAN_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("PHARMSCAN_PAGE_LOAD_TIMEOUT_SECS", "thirty");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMSCAN_PAGE_LOAD_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PHARMSCAN_PAGE_LOAD_TIMEOUT_SECS), got: {result:?}"
    );
}

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default desktop Chrome identity string presented to the scraped sites.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any `PHARMSCAN_*` value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any `PHARMSCAN_*` value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PHARMSCAN_ENV", "development"));
    let bind_addr = parse_addr("PHARMSCAN_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PHARMSCAN_LOG_LEVEL", "info");

    let fetch_user_agent = or_default("PHARMSCAN_FETCH_USER_AGENT", DEFAULT_USER_AGENT);
    let page_load_timeout_secs = parse_u64("PHARMSCAN_PAGE_LOAD_TIMEOUT_SECS", "30")?;
    let probe_timeout_secs = parse_u64("PHARMSCAN_PROBE_TIMEOUT_SECS", "15")?;
    let max_results_per_source = parse_usize("PHARMSCAN_MAX_RESULTS_PER_SOURCE", "3")?;
    let chrome_binary = lookup("PHARMSCAN_CHROME_BINARY").ok().map(PathBuf::from);

    let rate_limit_max_requests = parse_usize("PHARMSCAN_RATE_LIMIT_MAX_REQUESTS", "30")?;
    let rate_limit_window_secs = parse_u64("PHARMSCAN_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        fetch_user_agent,
        page_load_timeout_secs,
        probe_timeout_secs,
        max_results_per_source,
        chrome_binary,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

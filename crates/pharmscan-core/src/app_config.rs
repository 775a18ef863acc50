use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for all pharmscan binaries, loaded from
/// `PHARMSCAN_*` environment variables. Every field has a default, so a bare
/// environment starts a working development instance.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Desktop browser identity presented by the rendering session. Several
    /// of the target storefronts short-circuit to a bot interstitial when the
    /// default headless UA is visible.
    pub fetch_user_agent: String,
    /// Long budget for full page navigation and rendering.
    pub page_load_timeout_secs: u64,
    /// Short budget for the result-container existence probe.
    pub probe_timeout_secs: u64,
    /// Cap on extracted records per source.
    pub max_results_per_source: usize,
    /// Explicit Chrome/Chromium binary; auto-detected when unset.
    pub chrome_binary: Option<PathBuf>,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}

//! Rendered-content retrieval through a headless Chrome session.
//!
//! All three storefronts build their result grids client-side, so a plain
//! HTTP GET returns an empty shell; content has to come out of a real
//! rendering session. Each fetch owns an isolated browser instance and
//! applies the two-tier timeout: a long budget for navigation/rendering and
//! a short budget for the result-container existence probe.

use std::ffi::OsStr;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions};
use pharmscan_core::AppConfig;

use crate::error::ScraperError;
use crate::sources::SourceSite;

/// Margin added to the idle-browser watchdog beyond the two timeout budgets.
const IDLE_TIMEOUT_MARGIN: Duration = Duration::from_secs(15);

/// Seam between the aggregator and the rendering session.
///
/// `Ok(Some(html))` is fully rendered page content, `Ok(None)` means the
/// probe found no result container within its budget (a benign "no results"
/// outcome), and `Err` is a navigation/launch/capture failure.
pub trait FetchContent: Send + Sync {
    fn fetch_rendered<'a>(
        &'a self,
        source: SourceSite,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, ScraperError>> + Send + 'a>>;
}

/// [`FetchContent`] implementation backed by `headless_chrome`.
///
/// The CDP client is synchronous, so each fetch runs on the blocking pool
/// via `spawn_blocking`. One browser process is launched per fetch and torn
/// down when the `Browser` guard drops, on success and failure alike.
/// Pipelines never share a rendering session.
#[derive(Debug, Clone)]
pub struct HeadlessFetcher {
    user_agent: String,
    page_load_timeout: Duration,
    probe_timeout: Duration,
    chrome_binary: Option<PathBuf>,
}

impl HeadlessFetcher {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            user_agent: config.fetch_user_agent.clone(),
            page_load_timeout: Duration::from_secs(config.page_load_timeout_secs),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
            chrome_binary: config.chrome_binary.clone(),
        }
    }

    /// Navigates to `url` and captures rendered content, entirely on the
    /// calling (blocking-pool) thread.
    fn fetch_blocking(&self, source: SourceSite, url: &str) -> Result<Option<String>, ScraperError> {
        let user_agent_arg = format!("--user-agent={}", self.user_agent);
        let args = vec![
            OsStr::new("--disable-gpu"),
            // Product images are the bulk of page weight and irrelevant to
            // extraction.
            OsStr::new("--blink-settings=imagesEnabled=false"),
            OsStr::new(user_agent_arg.as_str()),
        ];

        let browser = Browser::new(LaunchOptions {
            headless: true,
            sandbox: false,
            window_size: Some((1920, 1080)),
            path: self.chrome_binary.clone(),
            idle_browser_timeout: self.page_load_timeout
                + self.probe_timeout
                + IDLE_TIMEOUT_MARGIN,
            args,
            ..Default::default()
        })
        .map_err(|e| ScraperError::Launch {
            reason: e.to_string(),
        })?;

        let tab = browser.new_tab().map_err(|e| ScraperError::Launch {
            reason: e.to_string(),
        })?;
        tab.set_default_timeout(self.page_load_timeout);

        tab.navigate_to(url).map_err(|e| ScraperError::Navigation {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        tab.wait_until_navigated()
            .map_err(|e| ScraperError::Navigation {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

        // Short-budget existence probe. A miss means the page rendered
        // without a result container: "no results", not a failure.
        if tab
            .wait_for_element_with_custom_timeout(source.probe_selector(), self.probe_timeout)
            .is_err()
        {
            return Ok(None);
        }

        let html = tab.get_content().map_err(|e| ScraperError::Capture {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        // `browser` drops here, killing the Chrome process on every path.
        Ok(Some(html))
    }
}

impl FetchContent for HeadlessFetcher {
    fn fetch_rendered<'a>(
        &'a self,
        source: SourceSite,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, ScraperError>> + Send + 'a>> {
        let fetcher = self.clone();
        let url = url.to_owned();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || fetcher.fetch_blocking(source, &url))
                .await
                .map_err(|_| ScraperError::WorkerJoin {
                    site: source.name(),
                })?
        })
    }
}

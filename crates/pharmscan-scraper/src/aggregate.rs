//! Concurrent fan-out over the three source pipelines.

use futures::stream::{self, StreamExt};
use pharmscan_core::{AggregateResponse, AppConfig, ProductRecord};

use crate::fetch::{FetchContent, HeadlessFetcher};
use crate::sources::{escape_query, SourceSite};

/// One worker per fixed source; no queueing is ever needed.
const SOURCE_WORKERS: usize = SourceSite::ALL.len();

/// Runs the per-source fetch→extract pipelines and groups their results.
///
/// Pipelines are fully isolated: a slow, empty, or failing source never
/// blocks or fails the other two. Every failure mode is converted to an
/// empty list before the join, so `aggregate` itself is infallible.
pub struct Aggregator<F = HeadlessFetcher> {
    fetcher: F,
    max_results: usize,
}

impl Aggregator<HeadlessFetcher> {
    /// Builds the production aggregator with a headless-Chrome fetcher.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            HeadlessFetcher::from_config(config),
            config.max_results_per_source,
        )
    }
}

impl<F: FetchContent> Aggregator<F> {
    #[must_use]
    pub fn new(fetcher: F, max_results: usize) -> Self {
        Self {
            fetcher,
            max_results,
        }
    }

    /// Answers `query` from all three sources concurrently.
    ///
    /// The response always carries all three source keys in fixed order,
    /// regardless of which pipeline finished first or whether any of them
    /// produced records.
    pub async fn aggregate(&self, query: &str) -> AggregateResponse {
        let escaped = escape_query(query);

        let outcomes: Vec<(SourceSite, Vec<ProductRecord>)> = stream::iter(SourceSite::ALL)
            .map(|source| {
                let escaped = escaped.clone();
                async move { (source, self.run_source(source, &escaped).await) }
            })
            .buffer_unordered(SOURCE_WORKERS)
            .collect()
            .await;

        let mut response = AggregateResponse::default();
        for (source, records) in outcomes {
            match source {
                SourceSite::Apollo => response.apollo = records,
                SourceSite::Netmeds => response.netmeds = records,
                SourceSite::OneMg => response.one_mg = records,
            }
        }
        response
    }

    /// One full fetch→extract pipeline for a single source.
    ///
    /// All failure modes are absorbed here: a probe miss is logged at info
    /// (indistinguishable from "no products" by design), and any pipeline
    /// error is logged and mapped to an empty list; nothing propagates to
    /// the join.
    async fn run_source(&self, source: SourceSite, escaped_query: &str) -> Vec<ProductRecord> {
        let url = source.search_url(escaped_query);
        match self.fetcher.fetch_rendered(source, &url).await {
            Ok(Some(html)) => {
                let records = source.extract(&html, self.max_results);
                tracing::info!(
                    source = source.name(),
                    count = records.len(),
                    "extracted product records"
                );
                records
            }
            Ok(None) => {
                tracing::info!(
                    source = source.name(),
                    %url,
                    "no result container within probe budget"
                );
                Vec::new()
            }
            Err(error) => {
                tracing::error!(
                    source = source.name(),
                    %url,
                    error = %error,
                    "source pipeline failed"
                );
                Vec::new()
            }
        }
    }
}

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod sources;

mod extract;
mod parse;

pub use aggregate::Aggregator;
pub use error::ScraperError;
pub use fetch::{FetchContent, HeadlessFetcher};
pub use sources::{escape_query, SourceSite};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to launch rendering session: {reason}")]
    Launch { reason: String },

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("failed to capture rendered content from {url}: {reason}")]
    Capture { url: String, reason: String },

    #[error("rendering worker for {site} was cancelled or panicked")]
    WorkerJoin { site: &'static str },
}

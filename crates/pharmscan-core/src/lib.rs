mod app_config;
mod config;
mod records;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{
    AggregateResponse, ProductRecord, LINK_NOT_FOUND, NAME_NOT_FOUND, PRICE_NOT_FOUND,
    QUANTITY_NOT_FOUND,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Configuration loader

use ::config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::Result;

/// Prefix of environment overrides, e.g. `BID_STEPS__DEFAULTS__START_PRICE`
pub const ENV_PREFIX: &str = "BID_STEPS";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with BID_STEPS__)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("defaults.bidding_steps")
            .try_parsing(true),
    );

    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}

/// Load configuration after reading a `.env` file, if present
pub fn load_with_dotenv(config_path: Option<&str>) -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    load_config(config_path)
}

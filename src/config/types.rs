//! Configuration types

use serde::{Deserialize, Serialize};

use crate::common::types::Parameters;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default pricing parameters of a request
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Caller-supplied defaults, before custom bid settings are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub start_price: i64,
    /// Recommended price, 0 when absent
    pub recprice: i64,
    /// Steps in absolute units, or percents with `percents_enabled`
    pub bidding_steps: Vec<i64>,
    pub percents_enabled: bool,
    /// Rounding granularity (0 = off)
    pub round_value: i64,
    /// Geo-config price limit (0 = off)
    pub max_bidding_price: i64,
    /// Bidding service price limit (0 = off)
    pub city_max_price: i64,
    pub surge_cost: i64,
    pub surge_ratio: f64,
    /// Meters
    pub distance: i64,
    /// Seconds
    pub duration: i64,
    /// Seconds
    pub eta: i64,
}

impl From<DefaultsConfig> for Parameters {
    fn from(config: DefaultsConfig) -> Self {
        Parameters {
            start_price: config.start_price,
            recprice: config.recprice,
            bidding_steps: config.bidding_steps,
            percents_enabled: config.percents_enabled,
            round_value: config.round_value,
            max_bidding_price: config.max_bidding_price,
            city_max_price: config.city_max_price,
            surge_cost: config.surge_cost,
            surge_ratio: config.surge_ratio,
            distance: config.distance,
            duration: config.duration,
            eta: config.eta,
            ..Parameters::default()
        }
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Custom bid settings JSON, applied on top of the defaults
    #[serde(default)]
    pub custom_bid_settings: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            custom_bid_settings: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_into_parameters() {
        let config = DefaultsConfig {
            start_price: 100,
            recprice: 120,
            bidding_steps: vec![5, 10],
            duration: 600,
            ..DefaultsConfig::default()
        };
        let params: Parameters = config.into();
        assert_eq!(params.start_price, 100);
        assert_eq!(params.recprice, 120);
        assert_eq!(params.bidding_steps, vec![5, 10]);
        assert_eq!(params.duration, 600);
        assert!(params.algorithm.is_none());
    }

    #[test]
    fn test_settings_default_log_level() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.settings.log_level, "info");
        assert!(config.settings.custom_bid_settings.is_none());
        assert_eq!(config.defaults, DefaultsConfig::default());
    }
}

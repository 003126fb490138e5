//! Bid step algorithms
//!
//! This module turns a pricing request into the list of prices a user may bid.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  BUILD (once per request)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  defaults + JSON settings                                   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  parse_custom_bid_settings() → Algorithm                    │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  Algorithm.modify(defaults) → Parameters                    │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CALCULATE (pure, sync)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Algorithm.calculate_bid_steps(&Parameters)                 │
//! │       │  default steps, optional per-algorithm reshaping    │
//! │       ▼                                                     │
//! │  sanitize_bid_price_steps() → BidStepsResult                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`BidAlgorithm`]: capability trait every algorithm implements
//! - [`Algorithm`]: closed set of algorithms selected by `algorithm_name`
//! - [`sanitize_bid_price_steps`]: rounding, dedup and clamping pass
//! - [`find_segment`]: price-range lookup for segment based algorithms
//!
//! # Example
//!
//! ```
//! use bid_steps::{build_parameters, calculate_bid_steps, Parameters};
//!
//! let defaults = Parameters {
//!     start_price: 100,
//!     recprice: 150,
//!     ..Parameters::default()
//! };
//! let settings = r#"{"algorithm_name":"with_recprice","segments":[{"start":0,"values":[5,10,15]}]}"#;
//!
//! let params = build_parameters(&defaults, settings).unwrap();
//! let result = calculate_bid_steps(&params);
//! assert_eq!(result.algorithm_name, "with_recprice");
//! assert_eq!(result.bid_steps, vec![150, 157, 165]);
//! ```

mod bid_mph;
mod default;
mod fixed_range;
mod recprice;
mod sanitize;
mod segments;
mod settings;
mod traits;

pub use bid_mph::{calc_max_bid, BidMph, BidMphDelta, BidMphNoExposure, BidMphNoExposureDelta};
pub use default::{raw_price_steps, DefaultAlgorithm};
pub use fixed_range::FixedRange;
pub use recprice::{WithRecprice, WithoutRecprice};
pub use sanitize::sanitize_bid_price_steps;
pub use segments::{find_segment, validate_segments, Segment};
pub use settings::{parse_custom_bid_settings, Algorithm};
pub use traits::BidAlgorithm;

use tracing::debug;

use crate::common::errors::Result;
use crate::common::types::{BidStepsResult, Parameters, ALGORITHM_DEFAULT};

/// Builds the effective parameters for the algorithm described by `json`.
///
/// Percent steps are always enabled for custom settings. On error the
/// caller's `defaults` are untouched and can be used as a fallback.
pub fn build_parameters(defaults: &Parameters, json: &str) -> Result<Parameters> {
    let algorithm = parse_custom_bid_settings(json)?;
    debug!(algorithm = algorithm.name(), "custom bid settings parsed");

    let mut params = defaults.clone();
    params.percents_enabled = true;

    let params = algorithm.modify(params);
    Ok(params.with_algorithm(algorithm))
}

/// Calculates the bid prices with the algorithm attached to `params`, or
/// the default algorithm when none is attached.
///
/// Never fails. Missing parameters yield a single zero price.
pub fn calculate_bid_steps<'a>(params: impl Into<Option<&'a Parameters>>) -> BidStepsResult {
    let Some(params) = params.into() else {
        return BidStepsResult::new(ALGORITHM_DEFAULT, vec![0]);
    };

    match &params.algorithm {
        Some(algorithm) => algorithm.calculate_bid_steps(params),
        None => DefaultAlgorithm.calculate_bid_steps(params),
    }
}

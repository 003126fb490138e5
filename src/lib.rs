//! Bid Steps Library
//!
//! Computes the discrete bid prices offered to a user during a competitive
//! pricing flow, from a base price, an optional recommended price and a
//! configured pricing algorithm.

pub mod algorithm;
pub mod common;
pub mod config;

// Re-export commonly used types
pub use algorithm::{
    build_parameters, calculate_bid_steps, parse_custom_bid_settings, Algorithm, BidAlgorithm,
    Segment,
};
pub use common::errors::{BidStepsError, Result};
pub use common::types::{BidStepsResult, Parameters};
pub use crate::config::types::AppConfig;

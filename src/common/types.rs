//! Shared data model for bid step calculation

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// Analytics label of the plain default calculation
pub const ALGORITHM_DEFAULT: &str = "";
pub const ALGORITHM_BID_MPH: &str = "bid_mph";
pub const ALGORITHM_BID_MPH_NO_EXPOSURE: &str = "bid_mph_no_exposure";
pub const ALGORITHM_BID_MPH_DELTA: &str = "bid_mph_delta";
pub const ALGORITHM_BID_MPH_NO_EXPOSURE_DELTA: &str = "bid_mph_no_exposure_delta";
pub const ALGORITHM_WITH_RECPRICE: &str = "with_recprice";
pub const ALGORITHM_WITHOUT_RECPRICE: &str = "without_recprice";
pub const ALGORITHM_FIXED_RANGE: &str = "fixed_range";

/// Calculation context threaded from the defaults through `modify` into
/// `calculate_bid_steps`.
///
/// All prices are integer currency units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    pub start_price: i64,
    /// Recommended price, 0 when absent
    pub recprice: i64,

    /// Ascending steps, absolute deltas or percents depending on
    /// `percents_enabled`
    pub bidding_steps: Vec<i64>,
    pub percents_enabled: bool,

    /// Round every candidate up to a multiple of this value (0 = off)
    pub round_value: i64,
    /// Geo-config limit
    pub max_bidding_price: i64,
    /// Bidding service (taximeter) limit, checked before `max_bidding_price`
    pub city_max_price: i64,

    pub surge_cost: i64,
    pub surge_ratio: f64,

    /// Distance in meters from departure to arrival
    pub distance: i64,
    /// Duration in seconds from departure to arrival
    pub duration: i64,
    /// Duration in seconds from the driver to the departure point
    pub eta: i64,

    /// "fixed_range" extremes, derived by its `modify`
    pub price_range_min: i64,
    pub price_range_max: i64,

    /// Set by `build_parameters`; `None` runs the default algorithm
    pub algorithm: Option<Algorithm>,
}

impl Parameters {
    /// True when no bidding steps are configured
    pub fn is_empty(&self) -> bool {
        self.bidding_steps.is_empty()
    }

    /// Attach an algorithm without running its `modify` step
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
}

/// Final bid prices plus the label of the branch that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidStepsResult {
    pub algorithm_name: String,
    pub bid_steps: Vec<i64>,
}

impl BidStepsResult {
    pub fn new(algorithm_name: impl Into<String>, bid_steps: Vec<i64>) -> Self {
        Self {
            algorithm_name: algorithm_name.into(),
            bid_steps,
        }
    }

    /// Returns the same steps under another analytics label
    pub fn relabel(self, algorithm_name: impl Into<String>) -> Self {
        Self {
            algorithm_name: algorithm_name.into(),
            bid_steps: self.bid_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_is_empty() {
        let mut params = Parameters::default();
        assert!(params.is_empty());
        assert!(params.algorithm.is_none());

        params.bidding_steps = vec![5];
        assert!(!params.is_empty());
    }

    #[test]
    fn test_result_json_shape() {
        let result = BidStepsResult::new(ALGORITHM_WITH_RECPRICE, vec![150, 157]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"algorithm_name":"with_recprice","bid_steps":[150,157]}"#);
    }

    #[test]
    fn test_relabel_keeps_steps() {
        let result = BidStepsResult::new(ALGORITHM_DEFAULT, vec![1, 2]).relabel("x");
        assert_eq!(result.algorithm_name, "x");
        assert_eq!(result.bid_steps, vec![1, 2]);
    }
}

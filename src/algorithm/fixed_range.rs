use serde::{Deserialize, Serialize};

use crate::algorithm::sanitize::sanitize_bid_price_steps;
use crate::algorithm::traits::BidAlgorithm;
use crate::common::types::{BidStepsResult, Parameters, ALGORITHM_FIXED_RANGE};

/// Three steps spread over a range symmetric around the recprice
///
/// ```json
/// { "algorithm_name": "fixed_range", "ratio": 0.98 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedRange {
    pub ratio: f64,
}

impl BidAlgorithm for FixedRange {
    fn name(&self) -> &'static str {
        ALGORITHM_FIXED_RANGE
    }

    /// Derives `price_range_min` / `price_range_max` from the recprice.
    fn modify(&self, mut params: Parameters) -> Parameters {
        let recprice = params.recprice as f64;
        params.price_range_min = (recprice * self.ratio) as i64;
        params.price_range_max = (recprice * (1.0 + (1.0 - self.ratio))) as i64;
        params
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        let min = params.price_range_min;
        let max = params.price_range_max;
        let third = (max - min) / 3;

        let prices = [min + third, min + third * 2, max];
        BidStepsResult::new(self.name(), sanitize_bid_price_steps(params, &prices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recprice(recprice: i64) -> Parameters {
        Parameters {
            recprice,
            start_price: 1,
            bidding_steps: vec![100, 200],
            ..Parameters::default()
        }
    }

    #[test]
    fn test_range_from_ratio() {
        let params = FixedRange { ratio: 0.98 }.modify(recprice(1000));
        assert_eq!(params.price_range_min, 980);
        assert_eq!(params.price_range_max, 1020);
    }

    #[test]
    fn test_three_steps_ignore_bidding_steps() {
        let alg = FixedRange { ratio: 0.98 };
        let params = alg.modify(recprice(1000));
        let result = alg.calculate_bid_steps(&params);
        assert_eq!(result, BidStepsResult::new("fixed_range", vec![993, 1006, 1020]));
    }

    #[test]
    fn test_zero_recprice_yields_nothing() {
        let alg = FixedRange { ratio: 0.98 };
        let params = alg.modify(recprice(0));
        assert!(alg.calculate_bid_steps(&params).bid_steps.is_empty());
    }

    #[test]
    fn test_clamped_by_city_max_price() {
        let alg = FixedRange { ratio: 0.98 };
        let mut params = alg.modify(recprice(1000));
        params.city_max_price = 1000;
        assert_eq!(alg.calculate_bid_steps(&params).bid_steps, vec![993, 1000]);
    }
}

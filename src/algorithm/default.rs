use crate::algorithm::sanitize::sanitize_bid_price_steps;
use crate::algorithm::traits::BidAlgorithm;
use crate::common::types::{BidStepsResult, Parameters, ALGORITHM_DEFAULT};

/// Plain step calculation, also the base computation of every other algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultAlgorithm;

/// Raw (unsanitized) prices for the configured steps.
///
/// Percent mode applies `start_price * (1 + step * 0.01)` in float and
/// truncates; absolute mode adds the step.
pub fn raw_price_steps(params: &Parameters) -> Vec<i64> {
    params
        .bidding_steps
        .iter()
        .map(|&step| {
            if params.percents_enabled {
                (params.start_price as f64 * (1.0 + step as f64 * 0.01)) as i64
            } else {
                params.start_price.wrapping_add(step)
            }
        })
        .collect()
}

impl BidAlgorithm for DefaultAlgorithm {
    fn name(&self) -> &'static str {
        ALGORITHM_DEFAULT
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        let prices = raw_price_steps(params);
        BidStepsResult::new(self.name(), sanitize_bid_price_steps(params, &prices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(start_price: i64, steps: Vec<i64>, percents_enabled: bool) -> Parameters {
        Parameters {
            start_price,
            bidding_steps: steps,
            percents_enabled,
            ..Parameters::default()
        }
    }

    #[test]
    fn test_absolute_steps() {
        let result = DefaultAlgorithm.calculate_bid_steps(&params(100, vec![5, 10, 15], false));
        assert_eq!(result, BidStepsResult::new("", vec![105, 110, 115]));
    }

    #[test]
    fn test_percent_steps_truncate() {
        // 150 * 1.05 = 157.5
        let result = DefaultAlgorithm.calculate_bid_steps(&params(150, vec![0, 5, 10], true));
        assert_eq!(result.bid_steps, vec![150, 157, 165]);
    }

    #[test]
    fn test_percent_float_error_is_kept() {
        // 100 * (1 + 15 * 0.01) is 114.999... in binary floating point
        assert_eq!(raw_price_steps(&params(100, vec![15], true)), vec![114]);
    }

    #[test]
    fn test_negative_steps_below_zero_are_dropped() {
        let result = DefaultAlgorithm.calculate_bid_steps(&params(10, vec![-20, -5, 5], false));
        assert_eq!(result.bid_steps, vec![5, 15]);
    }

    #[test]
    fn test_overflowing_absolute_step_is_dropped() {
        let result = DefaultAlgorithm.calculate_bid_steps(&params(i64::MAX - 1, vec![5], false));
        assert!(result.bid_steps.is_empty());
    }

    #[test]
    fn test_no_steps() {
        let result = DefaultAlgorithm.calculate_bid_steps(&params(100, vec![], false));
        assert!(result.bid_steps.is_empty());
        assert_eq!(result.algorithm_name, ALGORITHM_DEFAULT);
    }
}

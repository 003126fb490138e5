//! "Bad bids" policies
//!
//! All four variants cap the offered prices by a maximum bid derived from
//! the trip duration and the driver ETA:
//!
//! ```text
//! max_bid = (1 + alpha) * max(recprice, start_price) * (duration + max(eta, t)) / (duration + t)
//! ```
//!
//! They differ in how steps above the cap are reshaped.
//!
//! ```json
//! { "algorithm_name": "bid_mph", "alpha": 0.1, "t": 300 }
//! { "algorithm_name": "bid_mph_delta", "alpha": 0.1, "t": 300, "delta": 20 }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::default::DefaultAlgorithm;
use crate::algorithm::sanitize::sanitize_bid_price_steps;
use crate::algorithm::traits::BidAlgorithm;
use crate::common::types::{
    BidStepsResult, Parameters, ALGORITHM_BID_MPH, ALGORITHM_BID_MPH_DELTA,
    ALGORITHM_BID_MPH_NO_EXPOSURE, ALGORITHM_BID_MPH_NO_EXPOSURE_DELTA,
};

const SUFFIX_DEFAULT: &str = "_default";
const SUFFIX_RECALCULATED: &str = "_recalculated";

fn label(name: &str, recalculated: bool) -> String {
    let suffix = if recalculated {
        SUFFIX_RECALCULATED
    } else {
        SUFFIX_DEFAULT
    };
    format!("{name}{suffix}")
}

/// Upper bound for offered prices, truncated to integer
pub fn calc_max_bid(params: &Parameters, alpha: f64, t: f64) -> i64 {
    let recprice = params.recprice as f64;
    let start_price = params.start_price as f64;
    let duration = params.duration as f64;
    let eta = (params.eta as f64).max(t);

    let max_bid = (1.0 + alpha) * recprice.max(start_price) * (duration + eta) / (duration + t);
    max_bid as i64
}

/// Default steps plus the max bid, or `None` for the max bid when the
/// policy cannot apply (no steps or unknown duration).
fn default_with_max_bid(params: &Parameters, alpha: f64, t: f64) -> (Vec<i64>, Option<i64>) {
    let steps = DefaultAlgorithm.calculate_bid_steps(params).bid_steps;
    if steps.is_empty() || params.duration == 0 {
        return (steps, None);
    }

    let max_bid = calc_max_bid(params, alpha, t);
    (steps, Some(max_bid))
}

/// Redistributes all steps evenly up to the max bid when the default
/// steps exceed it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidMph {
    pub alpha: f64,
    pub t: f64,
}

impl BidAlgorithm for BidMph {
    fn name(&self) -> &'static str {
        ALGORITHM_BID_MPH
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        let (steps, max_bid) = default_with_max_bid(params, self.alpha, self.t);
        let Some(max_bid) = max_bid else {
            return BidStepsResult::new(label(self.name(), false), steps);
        };

        let highest = steps.iter().copied().max().unwrap_or_default();
        if highest <= max_bid {
            debug!(max_bid, highest, "bid_mph: default steps within max bid");
            return BidStepsResult::new(label(self.name(), false), steps);
        }

        let n_steps = steps.len() as i64;
        let step = max_bid.wrapping_sub(params.start_price) / n_steps;
        let recalculated: Vec<i64> = (1..=n_steps)
            .map(|i| params.start_price.wrapping_add(i.wrapping_mul(step)))
            .collect();

        debug!(max_bid, highest, step, "bid_mph: steps redistributed");
        BidStepsResult::new(
            label(self.name(), true),
            sanitize_bid_price_steps(params, &recalculated),
        )
    }
}

/// Clamps each step above the max bid down to it, leaving the rest alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidMphNoExposure {
    pub alpha: f64,
    pub t: f64,
}

impl BidAlgorithm for BidMphNoExposure {
    fn name(&self) -> &'static str {
        ALGORITHM_BID_MPH_NO_EXPOSURE
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        let (mut steps, max_bid) = default_with_max_bid(params, self.alpha, self.t);
        let Some(max_bid) = max_bid else {
            return BidStepsResult::new(label(self.name(), false), steps);
        };

        let mut clamped = false;
        for price in steps.iter_mut().filter(|price| **price > max_bid) {
            *price = max_bid;
            clamped = true;
        }

        debug!(max_bid, clamped, "bid_mph_no_exposure: steps clamped");
        BidStepsResult::new(
            label(self.name(), clamped),
            sanitize_bid_price_steps(params, &steps),
        )
    }
}

/// Like [`BidMph`], but spreads `[min(steps), max_bid]` evenly with at
/// least `delta` between neighbours, dropping steps as needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidMphDelta {
    pub alpha: f64,
    pub t: f64,
    pub delta: f64,
}

impl BidAlgorithm for BidMphDelta {
    fn name(&self) -> &'static str {
        ALGORITHM_BID_MPH_DELTA
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        let (steps, max_bid) = default_with_max_bid(params, self.alpha, self.t);
        let Some(max_bid) = max_bid else {
            return BidStepsResult::new(label(self.name(), false), steps);
        };

        let highest = steps.iter().copied().max().unwrap_or_default();
        if highest <= max_bid {
            return BidStepsResult::new(label(self.name(), false), steps);
        }

        let lowest = steps.iter().copied().min().unwrap_or_default() as f64;
        let span = max_bid as f64 - lowest;

        let recalculated = if span < self.delta {
            vec![max_bid]
        } else {
            let mut n_steps = steps.len();
            while n_steps > 2 && span / ((n_steps - 1) as f64) < self.delta {
                n_steps -= 1;
            }
            let step = if n_steps > 1 {
                span / ((n_steps - 1) as f64)
            } else {
                0.0
            };
            (0..n_steps)
                .map(|i| (lowest + i as f64 * step) as i64)
                .collect()
        };

        debug!(max_bid, n_steps = recalculated.len(), "bid_mph_delta: steps respaced");
        BidStepsResult::new(
            label(self.name(), true),
            sanitize_bid_price_steps(params, &recalculated),
        )
    }
}

/// Like [`BidMphNoExposure`], but steps above the max bid collapse into a
/// single max bid step, and the step right below it is dropped when closer
/// than `delta`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidMphNoExposureDelta {
    pub alpha: f64,
    pub t: f64,
    pub delta: f64,
}

impl BidAlgorithm for BidMphNoExposureDelta {
    fn name(&self) -> &'static str {
        ALGORITHM_BID_MPH_NO_EXPOSURE_DELTA
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        let (steps, max_bid) = default_with_max_bid(params, self.alpha, self.t);
        let Some(max_bid) = max_bid else {
            return BidStepsResult::new(label(self.name(), false), steps);
        };

        let highest = steps.iter().copied().max().unwrap_or_default();
        if highest <= max_bid {
            return BidStepsResult::new(label(self.name(), false), steps);
        }

        let mut kept: Vec<i64> = steps.into_iter().filter(|&price| price < max_bid).collect();
        kept.push(max_bid);
        if kept.len() >= 2 {
            let prev_idx = kept.len() - 2;
            if ((max_bid - kept[prev_idx]) as f64) < self.delta {
                kept.remove(prev_idx);
            }
        }

        debug!(max_bid, n_steps = kept.len(), "bid_mph_no_exposure_delta: steps capped");
        BidStepsResult::new(
            label(self.name(), true),
            sanitize_bid_price_steps(params, &kept),
        )
    }
}

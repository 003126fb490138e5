//! Segment based policies
//!
//! ```json
//! {
//!     "algorithm_name": "with_recprice",
//!     "segments": [
//!         { "start": 0, "values": [5, 10, 15] },
//!         { "start": 500, "values": [3, 6, 9] }
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::algorithm::default::DefaultAlgorithm;
use crate::algorithm::segments::{find_segment, null_as_empty, Segment};
use crate::algorithm::traits::BidAlgorithm;
use crate::common::types::{
    BidStepsResult, Parameters, ALGORITHM_WITHOUT_RECPRICE, ALGORITHM_WITH_RECPRICE,
};

/// Steps picked by `max(recprice, start_price)`; a recprice above the start
/// price becomes the new baseline with a leading zero step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithRecprice {
    #[serde(deserialize_with = "null_as_empty")]
    pub segments: Vec<Segment>,
}

impl BidAlgorithm for WithRecprice {
    fn name(&self) -> &'static str {
        ALGORITHM_WITH_RECPRICE
    }

    fn modify(&self, mut params: Parameters) -> Parameters {
        let price = params.recprice.max(params.start_price);
        let segment = match find_segment(price, &self.segments) {
            Ok(segment) => segment,
            Err(err) => {
                warn!(error = %err, "with_recprice: keeping configured bidding steps");
                return params;
            }
        };

        let mut bidding_steps = segment.values.clone();
        if params.start_price < params.recprice {
            params.start_price = params.recprice;
            // The zero step takes the slot of the last value. A single value
            // is kept as is.
            let keep = match bidding_steps.len() {
                1 => 1,
                len => len.saturating_sub(1),
            };
            bidding_steps.truncate(keep);
            bidding_steps.insert(0, 0);
        }

        params.bidding_steps = bidding_steps;
        params
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        DefaultAlgorithm
            .calculate_bid_steps(params)
            .relabel(self.name())
    }
}

/// Steps picked by the start price alone.
///
/// Also selected by the deprecated `"without_recprice": true` flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithoutRecprice {
    #[serde(deserialize_with = "null_as_empty")]
    pub segments: Vec<Segment>,
}

impl BidAlgorithm for WithoutRecprice {
    fn name(&self) -> &'static str {
        ALGORITHM_WITHOUT_RECPRICE
    }

    fn modify(&self, mut params: Parameters) -> Parameters {
        match find_segment(params.start_price, &self.segments) {
            Ok(segment) => params.bidding_steps = segment.values.clone(),
            Err(err) => {
                warn!(error = %err, "without_recprice: keeping configured bidding steps");
            }
        }
        params
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        DefaultAlgorithm
            .calculate_bid_steps(params)
            .relabel(self.name())
    }
}

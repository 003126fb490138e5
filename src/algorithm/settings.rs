//! Custom bid settings parsing
//!
//! The JSON blob is decoded twice: first into a loose envelope to find the
//! algorithm, then into the selected algorithm's own settings.

use serde::Deserialize;
use tracing::debug;

use crate::algorithm::bid_mph::{BidMph, BidMphDelta, BidMphNoExposure, BidMphNoExposureDelta};
use crate::algorithm::default::DefaultAlgorithm;
use crate::algorithm::fixed_range::FixedRange;
use crate::algorithm::recprice::{WithRecprice, WithoutRecprice};
use crate::algorithm::segments::{null_as_empty, Segment};
use crate::algorithm::traits::BidAlgorithm;
use crate::common::errors::{BidStepsError, Result};
use crate::common::types::{
    BidStepsResult, Parameters, ALGORITHM_BID_MPH, ALGORITHM_BID_MPH_DELTA,
    ALGORITHM_BID_MPH_NO_EXPOSURE, ALGORITHM_BID_MPH_NO_EXPOSURE_DELTA, ALGORITHM_FIXED_RANGE,
    ALGORITHM_WITHOUT_RECPRICE, ALGORITHM_WITH_RECPRICE,
};

/// Every known bid step algorithm, each carrying its own settings
#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm {
    Default(DefaultAlgorithm),
    BidMph(BidMph),
    BidMphNoExposure(BidMphNoExposure),
    BidMphDelta(BidMphDelta),
    BidMphNoExposureDelta(BidMphNoExposureDelta),
    WithRecprice(WithRecprice),
    WithoutRecprice(WithoutRecprice),
    FixedRange(FixedRange),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Default(DefaultAlgorithm)
    }
}

impl Algorithm {
    fn as_dyn(&self) -> &dyn BidAlgorithm {
        match self {
            Algorithm::Default(alg) => alg,
            Algorithm::BidMph(alg) => alg,
            Algorithm::BidMphNoExposure(alg) => alg,
            Algorithm::BidMphDelta(alg) => alg,
            Algorithm::BidMphNoExposureDelta(alg) => alg,
            Algorithm::WithRecprice(alg) => alg,
            Algorithm::WithoutRecprice(alg) => alg,
            Algorithm::FixedRange(alg) => alg,
        }
    }
}

impl BidAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        self.as_dyn().name()
    }

    fn modify(&self, params: Parameters) -> Parameters {
        self.as_dyn().modify(params)
    }

    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
        self.as_dyn().calculate_bid_steps(params)
    }
}

/// Fields shared by every settings blob
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CustomBidSettings {
    /// Identifier of the algorithm
    algorithm_name: Option<String>,

    /// Optional, for algorithms with segmentation
    #[serde(deserialize_with = "null_as_empty")]
    segments: Vec<Segment>,

    /// Deprecated. Use `algorithm_name` instead.
    without_recprice: bool,
}

/// Select and decode the algorithm described by a settings blob.
///
/// Without a known `algorithm_name` the legacy rules apply: segments are
/// required and `without_recprice` picks between the two segment policies.
pub fn parse_custom_bid_settings(json: &str) -> Result<Algorithm> {
    let base: CustomBidSettings = serde_json::from_str(json)?;

    let algorithm = match base.algorithm_name.as_deref().unwrap_or_default() {
        ALGORITHM_BID_MPH => Algorithm::BidMph(serde_json::from_str(json)?),
        ALGORITHM_WITH_RECPRICE => Algorithm::WithRecprice(serde_json::from_str(json)?),
        ALGORITHM_WITHOUT_RECPRICE => Algorithm::WithoutRecprice(serde_json::from_str(json)?),
        ALGORITHM_BID_MPH_NO_EXPOSURE => Algorithm::BidMphNoExposure(serde_json::from_str(json)?),
        ALGORITHM_BID_MPH_DELTA => Algorithm::BidMphDelta(serde_json::from_str(json)?),
        ALGORITHM_BID_MPH_NO_EXPOSURE_DELTA => {
            Algorithm::BidMphNoExposureDelta(serde_json::from_str(json)?)
        }
        ALGORITHM_FIXED_RANGE => Algorithm::FixedRange(serde_json::from_str(json)?),
        other => {
            if base.segments.is_empty() {
                return Err(BidStepsError::empty_segments());
            }
            debug!(
                algorithm_name = other,
                without_recprice = base.without_recprice,
                "falling back to legacy segment settings"
            );
            if base.without_recprice {
                Algorithm::WithoutRecprice(serde_json::from_str(json)?)
            } else {
                Algorithm::WithRecprice(serde_json::from_str(json)?)
            }
        }
    };

    Ok(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bid_mph() {
        let alg = parse_custom_bid_settings(r#"{"algorithm_name":"bid_mph","alpha":0.1,"t":300}"#)
            .unwrap();
        assert_eq!(alg, Algorithm::BidMph(BidMph { alpha: 0.1, t: 300.0 }));
        assert_eq!(alg.name(), "bid_mph");
    }

    #[test]
    fn test_no_exposure_variants() {
        let alg = parse_custom_bid_settings(r#"{"algorithm_name":"bid_mph_no_exposure"}"#).unwrap();
        assert_eq!(alg, Algorithm::BidMphNoExposure(BidMphNoExposure::default()));

        let alg = parse_custom_bid_settings(
            r#"{"algorithm_name":"bid_mph_no_exposure_delta","alpha":0.2,"t":60,"delta":10}"#,
        )
        .unwrap();
        assert_eq!(
            alg,
            Algorithm::BidMphNoExposureDelta(BidMphNoExposureDelta {
                alpha: 0.2,
                t: 60.0,
                delta: 10.0
            })
        );
    }

    #[test]
    fn test_fixed_range() {
        let alg = parse_custom_bid_settings(r#"{"algorithm_name":"fixed_range","ratio":0.98}"#)
            .unwrap();
        assert_eq!(alg, Algorithm::FixedRange(FixedRange { ratio: 0.98 }));
    }

    #[test]
    fn test_named_segment_algorithm_allows_empty_segments() {
        let alg = parse_custom_bid_settings(r#"{"algorithm_name":"with_recprice"}"#).unwrap();
        assert_eq!(alg, Algorithm::WithRecprice(WithRecprice::default()));
    }

    #[test]
    fn test_legacy_without_name() {
        let json = r#"{"segments":[{"start":0,"values":[5,10]}]}"#;
        let alg = parse_custom_bid_settings(json).unwrap();
        assert_eq!(
            alg,
            Algorithm::WithRecprice(WithRecprice {
                segments: vec![Segment::new(0, vec![5, 10])]
            })
        );
    }

    #[test]
    fn test_legacy_without_recprice_flag() {
        let json = r#"{"algorithm_name":"unknown","without_recprice":true,"segments":[{"start":0,"values":[5]}]}"#;
        let alg = parse_custom_bid_settings(json).unwrap();
        assert_eq!(alg.name(), "without_recprice");
    }

    #[test]
    fn test_legacy_requires_segments() {
        let err = parse_custom_bid_settings(r#"{"algorithm_name":"unknown","segments":[]}"#)
            .unwrap_err();
        assert!(err.is_invalid_settings());

        let err = parse_custom_bid_settings("{}").unwrap_err();
        assert!(err.is_invalid_settings());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_custom_bid_settings("{not json").unwrap_err();
        assert!(matches!(err, BidStepsError::MalformedConfig(_)));

        let err = parse_custom_bid_settings(r#"{"algorithm_name":"bid_mph","alpha":"high"}"#)
            .unwrap_err();
        assert!(matches!(err, BidStepsError::MalformedConfig(_)));
    }

    #[test]
    fn test_default_algorithm_dispatch() {
        let params = Parameters {
            start_price: 100,
            bidding_steps: vec![5],
            ..Parameters::default()
        };
        let result = Algorithm::default().calculate_bid_steps(&params);
        assert_eq!(result, BidStepsResult::new("", vec![105]));
    }
}

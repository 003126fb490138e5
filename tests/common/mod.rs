//! Common test utilities and fixtures

#![allow(dead_code)]

use bid_steps::Parameters;

/// Absolute-step defaults: start price 100, steps 5/10/15
pub fn absolute_defaults() -> Parameters {
    Parameters {
        start_price: 100,
        bidding_steps: vec![5, 10, 15],
        percents_enabled: false,
        ..Parameters::default()
    }
}

/// Defaults of a 10 minute trip with the driver 5 minutes away
pub fn trip_defaults(start_price: i64, recprice: i64) -> Parameters {
    Parameters {
        start_price,
        recprice,
        bidding_steps: vec![10, 20, 30],
        duration: 600,
        eta: 300,
        distance: 5_000,
        ..Parameters::default()
    }
}

/// Sample custom bid settings
pub mod settings {
    pub const WITH_RECPRICE: &str = r#"{
        "algorithm_name": "with_recprice",
        "segments": [
            {"start": 0, "values": [5, 10, 15]}
        ]
    }"#;

    pub const WITHOUT_RECPRICE: &str = r#"{
        "algorithm_name": "without_recprice",
        "segments": [
            {"start": 0, "values": [5, 10, 15]},
            {"start": 500, "values": [2, 4, 6]}
        ]
    }"#;

    pub const LEGACY_WITHOUT_RECPRICE: &str = r#"{
        "segments": [
            {"start": 0, "values": [5, 10, 15]},
            {"start": 500, "values": [2, 4, 6]}
        ],
        "without_recprice": true
    }"#;

    pub const FIXED_RANGE: &str = r#"{"algorithm_name": "fixed_range", "ratio": 0.98}"#;

    pub const BID_MPH: &str = r#"{"algorithm_name": "bid_mph", "alpha": 0.05, "t": 300}"#;

    pub const BID_MPH_NO_EXPOSURE: &str =
        r#"{"algorithm_name": "bid_mph_no_exposure", "alpha": 0.05, "t": 300}"#;

    pub const UNKNOWN_WITHOUT_SEGMENTS: &str = r#"{"algorithm_name": "surge_v2", "segments": []}"#;
}

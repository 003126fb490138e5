use serde::{Deserialize, Deserializer, Serialize};

use crate::common::errors::{BidStepsError, Result};

/// Price-range keyed step list
///
/// ```json
/// { "start": 0, "values": [5, 10, 15] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Lower price bound (inclusive)
    #[serde(default)]
    pub start: i64,
    /// Bidding steps used from `start` upwards
    #[serde(default, deserialize_with = "null_as_empty")]
    pub values: Vec<i64>,
}

impl Segment {
    pub fn new(start: i64, values: Vec<i64>) -> Self {
        Self { start, values }
    }
}

/// Accepts `null` where a list is expected
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn validate_segments(segments: &[Segment]) -> Result<()> {
    if segments.is_empty() {
        return Err(BidStepsError::empty_segments());
    }
    Ok(())
}

/// Picks the last segment whose `start` does not exceed `price`.
///
/// Segments are expected in ascending `start` order. A price below every
/// bound falls back to the first segment.
pub fn find_segment(price: i64, segments: &[Segment]) -> Result<&Segment> {
    validate_segments(segments)?;

    let mut found = &segments[0];
    for segment in segments {
        if segment.start > price {
            break;
        }
        found = segment;
    }

    Ok(found)
}

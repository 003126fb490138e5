use crate::common::types::{BidStepsResult, Parameters};

/// Capability set shared by every bid step algorithm
///
/// A calculation runs in two phases:
///
/// 1. `modify` derives the effective parameters from the caller's defaults
///    (once per request, before any steps are produced)
/// 2. `calculate_bid_steps` turns those parameters into absolute prices
///
/// # Implementation Notes
///
/// - Both phases are pure: no I/O, no shared state
/// - `calculate_bid_steps` never fails; degenerate input yields an empty
///   or default result
/// - The returned `algorithm_name` feeds analytics and must identify the
///   branch taken, not just the algorithm
///
/// # Example
///
/// ```ignore
/// struct Flat;
///
/// impl BidAlgorithm for Flat {
///     fn name(&self) -> &'static str { "flat" }
///
///     fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult {
///         let steps = sanitize_bid_price_steps(params, &[params.start_price]);
///         BidStepsResult::new(self.name(), steps)
///     }
/// }
/// ```
pub trait BidAlgorithm: Send + Sync {
    /// Identifier used in settings and as the base of analytics labels
    fn name(&self) -> &'static str;

    /// Derive the effective parameters for this algorithm
    ///
    /// Default implementation leaves the parameters unchanged.
    fn modify(&self, params: Parameters) -> Parameters {
        params
    }

    /// Calculate the final bid prices in absolute format
    fn calculate_bid_steps(&self, params: &Parameters) -> BidStepsResult;
}

use crate::common::types::Parameters;

/// Rounds, deduplicates and clamps raw candidate prices.
///
/// Per candidate, in order:
/// 1. round up to a multiple of `round_value` (when set)
/// 2. skip non-positive prices
/// 3. skip a price equal to the last accepted one
/// 4. `city_max_price` clamp: emit the limit and stop
/// 5. `max_bidding_price` clamp: emit the limit and stop
///
/// The emitted limit is not deduplicated, so a list ending on the limit
/// followed by a higher price ends with the limit twice.
pub fn sanitize_bid_price_steps(params: &Parameters, price_values: &[i64]) -> Vec<i64> {
    let mut bid_price_steps = Vec::with_capacity(price_values.len());

    for &raw in price_values {
        let mut price = raw;
        if params.round_value > 0 {
            let rem = price % params.round_value;
            if rem != 0 {
                price = price.wrapping_add(params.round_value.wrapping_sub(rem));
            }
        }

        if price <= 0 {
            continue;
        }

        if bid_price_steps.last() == Some(&price) {
            continue;
        }

        if params.city_max_price > 0 && price > params.city_max_price {
            bid_price_steps.push(params.city_max_price);
            break;
        }

        if params.max_bidding_price > 0 && price > params.max_bidding_price {
            bid_price_steps.push(params.max_bidding_price);
            break;
        }

        bid_price_steps.push(price);
    }

    bid_price_steps
}

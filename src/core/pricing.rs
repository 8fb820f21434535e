//! Tattoo price estimation.

use crate::models::estimate::{Complexity, EstimateDraft, TattooSize};

/// Estimate the price of a session.
///
/// Returns 0 when size or complexity is missing or when `hours` is zero.
/// Unknown size or complexity keys are priced with a multiplier of 1.
/// The result is rounded to the nearest integer, halves away from zero.
pub fn calculate_price(size: &str, complexity: &str, hours: f64, hourly_rate: f64) -> i64 {
    if size.is_empty() || complexity.is_empty() || hours == 0.0 {
        return 0;
    }

    let base_price = hours * hourly_rate;
    let size_multiplier = size_multiplier(size);
    let complexity_multiplier = complexity_multiplier(complexity);

    (base_price * size_multiplier * complexity_multiplier).round() as i64
}

pub fn size_multiplier(key: &str) -> f64 {
    TattooSize::from_key(key).map_or(1.0, |s| s.multiplier())
}

pub fn complexity_multiplier(key: &str) -> f64 {
    Complexity::from_key(key).map_or(1.0, |c| c.multiplier())
}

/// Price for the current calculator inputs.
pub fn estimate(draft: &EstimateDraft) -> i64 {
    calculate_price(
        &draft.size,
        &draft.complexity,
        draft.hours,
        draft.hourly_rate,
    )
}

//! Derived rating computation.

use rust_decimal::prelude::*;

/// The catalog's fixed "present" year.
pub const CURRENT_YEAR: i32 = 3019;

/// Compute the rating of a ship from its speed, usage flag, and the UTC
/// calendar year of its production instant.
///
/// `80 * speed * usage / (3019 - year + 1)`, rounded half-up to two
/// decimals. A used ship is worth half a new one.
pub fn compute_rating(speed: f64, is_used: bool, prod_year: i32) -> f64 {
    let usage = if is_used { 0.5 } else { 1.0 };
    let raw = 80.0 * speed * usage / f64::from(CURRENT_YEAR - prod_year + 1);
    round_half_up(raw)
}

/// Round to two decimals with ties away from zero. Non-finite values pass
/// through unrounded.
fn round_half_up(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::{CURRENT_YEAR, compute_rating};

    #[test]
    fn fresh_ship_in_the_present_year_rates_its_speed_share() {
        assert_eq!(compute_rating(0.5, false, CURRENT_YEAR), 40.0);
    }

    #[test]
    fn usage_halves_the_rating() {
        assert_eq!(compute_rating(0.5, true, CURRENT_YEAR), 20.0);
    }

    #[test]
    fn older_ships_rate_lower() {
        // 80 * 0.5 / (3019 - 3000 + 1) = 2.0
        assert_eq!(compute_rating(0.5, false, 3000), 2.0);
        // 80 * 0.99 / 220 = 0.36
        assert_eq!(compute_rating(0.99, false, 2800), 0.36);
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 80 * 0.45 / 32 = 1.125 exactly in binary floating point.
        assert_eq!(compute_rating(0.45, false, 2988), 1.13);
        // 80 * 0.25 / 32 = 0.625 exactly.
        assert_eq!(compute_rating(0.25, false, 2988), 0.63);
    }

    #[test]
    fn tiny_ratings_collapse_to_zero() {
        // 80 * 0.01 * 0.5 / 221 rounds to 0.00.
        assert_eq!(compute_rating(0.01, true, 2799), 0.0);
    }
}

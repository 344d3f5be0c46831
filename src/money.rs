//! Fixed-point currency helpers.
//!
//! Money arrives from callers as floating-point major units ("12.50") and is
//! converted to integer minor units (cents) before any arithmetic. All
//! conversions round to the nearest unit, so `0.29` becomes 29 cents rather
//! than the 28 that plain truncation of `0.29 * 100.0` would produce.

/// `10^decimal_places` as a float scale factor.
pub fn scale(decimal_places: u32) -> f64 {
    10f64.powi(decimal_places as i32)
}

/// Converts a major-unit amount to minor units, rounding to nearest.
///
/// ```
/// use u_optimize::money::to_minor_units;
///
/// assert_eq!(to_minor_units(0.29, 2), 29);
/// assert_eq!(to_minor_units(12.5, 2), 1250);
/// ```
pub fn to_minor_units(major: f64, decimal_places: u32) -> i64 {
    (major * scale(decimal_places)).round() as i64
}

/// Converts minor units back to a major-unit float.
pub fn from_minor_units(minor: i64, decimal_places: u32) -> f64 {
    minor as f64 / scale(decimal_places)
}

/// Formats minor units as a dollar label, e.g. `25 -> "$0.25"`.
pub fn format_minor_units(minor: i64, decimal_places: u32) -> String {
    format!(
        "${:.*}",
        decimal_places as usize,
        from_minor_units(minor, decimal_places)
    )
}

/// Change owed for a payment, in minor units.
///
/// Both operands are converted before subtracting; a negative result means
/// the payment does not cover the cost.
pub fn change_due(amount_paid: f64, total_cost: f64, decimal_places: u32) -> i64 {
    to_minor_units(amount_paid, decimal_places) - to_minor_units(total_cost, decimal_places)
}

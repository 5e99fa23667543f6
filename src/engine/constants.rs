/// Remaining-amount epsilon under which the bill counts as settled.
///
/// Absorbs sub-cent floating noise from shared-item division.
pub const SETTLE_EPSILON: f64 = 0.01;

/// Raw bill totals above this are assumed to be in a zero-decimal currency
/// (e.g. Chilean peso) and rendered without decimals. No real currency
/// metadata exists upstream, so magnitude is the only available signal.
pub const ZERO_DECIMAL_THRESHOLD: f64 = 1000.0;

/// Minimum jaro-winkler score for a fuzzy item-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Prefix for auto-generated diner names ("Person 1", "Person 2", ...).
pub const AUTO_NAME_PREFIX: &str = "Person ";

/// Discount percentage bounds.
pub const DISCOUNT_MIN: u8 = 0;
pub const DISCOUNT_MAX: u8 = 100;

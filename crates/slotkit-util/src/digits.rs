//! Small numeric helpers.

/// Number of decimal digits in `number`, ignoring the sign.
///
/// Zero has one digit.
pub fn count_digits(number: i64) -> u32 {
    number.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

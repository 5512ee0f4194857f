//! Conversion between whole-coin amounts and satoshis.
//!
//! Amounts are `i64` satoshis everywhere inside the crate; floating-point
//! coin values only cross in through `btc_to_satoshis`.

use crate::TransactionError;

/// Satoshis in one bitcoin.
pub const SATOSHIS_PER_BITCOIN: i64 = 100_000_000;

/// Amount of a blanked output in a SIGHASH_SINGLE preimage.
pub const NEGATIVE_SATOSHI: i64 = -1;

/// Convert a coin amount to satoshis, rounding half to even.
///
/// # Returns
/// `OutOfRange` if the amount is NaN, infinite, or does not fit an `i64`
/// once scaled.
pub fn btc_to_satoshis(btc: f64) -> Result<i64, TransactionError> {
    let scaled = (btc * SATOSHIS_PER_BITCOIN as f64).round_ties_even();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return Err(TransactionError::OutOfRange(format!(
            "amount {} BTC cannot be expressed in satoshis",
            btc
        )));
    }
    Ok(scaled as i64)
}

/// Convert satoshis to a coin amount for display.
pub fn satoshis_to_btc(satoshis: i64) -> f64 {
    satoshis as f64 / SATOSHIS_PER_BITCOIN as f64
}

//! Numeric conversion utilities.
//!
//! Staking contracts report totals as fixed-point integers (`uint256` scaled
//! by a power of ten). These helpers normalize those raw values into `f64`
//! using BigDecimal, avoiding the precision loss of a direct cast.

use alloy::primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use once_cell::sync::Lazy;

/// Convert a raw U256 amount to f64, shifting by `decimals` places.
///
/// Returns 0.0 if the value cannot be represented as a finite f64.
pub fn u256_to_f64(value: U256, decimals: u8) -> f64 {
    u256_to_f64_safe(value, decimals).unwrap_or(0.0)
}

/// Convert a raw U256 amount to f64, returning None on failure.
///
/// The value goes through BigDecimal so amounts larger than 2^53 keep their
/// leading digits intact before the final rounding to f64.
pub fn u256_to_f64_safe(value: U256, decimals: u8) -> Option<f64> {
    // Bytes are faster than round-tripping through a decimal string
    let bytes: [u8; 32] = value.to_le_bytes();
    let big_int = BigInt::from_bytes_le(num_bigint::Sign::Plus, &bytes);
    let big_value = BigDecimal::from(big_int);

    let adjusted = big_value / big_pow10(decimals);

    let result = adjusted.to_f64()?;

    if result.is_finite() {
        Some(result)
    } else {
        None
    }
}

static POW10_CACHE: Lazy<[BigDecimal; 25]> =
    Lazy::new(|| std::array::from_fn(|i| BigDecimal::from(BigInt::from(10u32).pow(i as u32))));

/// Compute 10^exp as BigDecimal.
fn big_pow10(exp: u8) -> BigDecimal {
    if (exp as usize) < POW10_CACHE.len() {
        POW10_CACHE[exp as usize].clone()
    } else {
        BigDecimal::from(BigInt::from(10u32).pow(exp as u32))
    }
}

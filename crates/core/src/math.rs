//! WAD fixed-point arithmetic primitives.
//!
//! All monetary values in this crate are 18-decimal fixed-point integers
//! ("WAD" convention), matching the scale used by the papr contracts. The
//! helpers here round down (truncate), like the on-chain library they mirror,
//! so results agree with contract arithmetic in decimal value.

use alloy_primitives::U256;

/// The WAD scaling constant: 10^18, representing 1.0 in fixed-point
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Seconds in a 365-day year, used to annualize per-period rates
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Multiplies two WAD values, rounding down.
pub fn w_mul_down(a: U256, b: U256) -> U256 {
    a * b / WAD
}

/// Divides two WAD values, rounding down.
///
/// Returns zero when `b` is zero; callers that need to distinguish that case
/// check the denominator first.
pub fn w_div_down(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        return U256::ZERO;
    }
    a * WAD / b
}

/// Computes `a * b / denominator`, rounding down.
pub fn mul_div_down(a: U256, b: U256, denominator: U256) -> U256 {
    if denominator.is_zero() {
        return U256::ZERO;
    }
    a * b / denominator
}

/// Raises a WAD value to an integer power via exponentiation by squaring.
///
/// Each intermediate multiply is floor-rescaled to 18 decimals, so the result
/// matches a chain of `w_mul_down` calls. `w_pow(x, 0)` is exactly [`WAD`].
pub fn w_pow(x: U256, n: u64) -> U256 {
    let mut base = x;
    let mut exp = n;
    let mut result = WAD;
    while exp > 0 {
        if exp & 1 == 1 {
            result = w_mul_down(result, base);
        }
        exp >>= 1;
        if exp > 0 {
            base = w_mul_down(base, base);
        }
    }
    result
}

/// Converts a WAD value to `f64`.
///
/// Display-level approximation only; never feed the result back into
/// fixed-point computations.
pub fn wad_to_f64(x: U256) -> f64 {
    scaled_to_f64(x, 18)
}

/// Converts a fixed-point value with the given decimal precision to `f64`.
///
/// Values above `u128::MAX` saturate, which is far beyond any realistic
/// token amount.
pub fn scaled_to_f64(x: U256, decimals: u32) -> f64 {
    x.saturating_to::<u128>() as f64 / 10f64.powi(decimals as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w_mul_down_rounds_down() {
        // 0.5 * 0.000000000000000003 = 0.0000000000000000015 -> truncates to 1 wei
        let half = WAD / U256::from(2);
        assert_eq!(w_mul_down(half, U256::from(3)), U256::from(1));
    }

    #[test]
    fn test_w_mul_down_identity() {
        let x = U256::from(123_456_789_000_000_000u64);
        assert_eq!(w_mul_down(x, WAD), x);
    }

    #[test]
    fn test_w_div_down() {
        // 1.0 / 3.0 = 0.333... truncated
        let third = w_div_down(WAD, U256::from(3) * WAD);
        assert_eq!(third, U256::from(333_333_333_333_333_333u64));
    }

    #[test]
    fn test_w_div_down_zero_denominator() {
        assert_eq!(w_div_down(WAD, U256::ZERO), U256::ZERO);
    }

    #[test]
    fn test_w_pow_zero_exponent() {
        assert_eq!(w_pow(U256::from(5) * WAD, 0), WAD);
        assert_eq!(w_pow(U256::ZERO, 0), WAD);
    }

    #[test]
    fn test_w_pow_one() {
        let x = U256::from(900_000_000_000_000_000u64);
        assert_eq!(w_pow(x, 1), x);
    }

    #[test]
    fn test_w_pow_twenty_four_periods() {
        // 0.9^24 with floor rescaling at every squaring step
        let x = U256::from(900_000_000_000_000_000u64);
        assert_eq!(w_pow(x, 24), U256::from(79_766_443_076_872_509u64));
    }

    #[test]
    fn test_w_pow_squares() {
        // 0.5^2 = 0.25 exactly
        let half = WAD / U256::from(2);
        assert_eq!(w_pow(half, 2), WAD / U256::from(4));
    }

    #[test]
    fn test_wad_to_f64() {
        let x = U256::from(1_500_000_000_000_000_000u64);
        assert!((wad_to_f64(x) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_scaled_to_f64_six_decimals() {
        // 2.5 at 6-decimal precision (e.g. USDC)
        let x = U256::from(2_500_000u64);
        assert!((scaled_to_f64(x, 6) - 2.5).abs() < 1e-12);
    }
}

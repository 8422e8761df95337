//! Loan-to-value calculations for papr vaults.
//!
//! A vault's max debt is its collateral valuation scaled by the protocol's
//! `maxLTV`; the displayed LTV is how much of that ceiling the outstanding
//! debt consumes. These are display-level numbers, so the WAD figures are
//! converted to `f64` at the token's decimal precision before dividing,
//! matching the reference rounding behavior.

use alloy_primitives::U256;

use crate::math::{scaled_to_f64, w_mul_down, wad_to_f64};

/// Computes a vault's loan-to-value ratio as a fraction (`0.25` = 25%).
///
/// Both debt figures are converted to decimal numbers at `decimals`
/// precision before dividing, then scaled by the protocol `max_ltv`
/// fraction:
///
/// ```text
/// ltv = (vault_debt / max_debt_for_vault) * max_ltv
/// ```
///
/// Returns `None` when `max_debt_for_vault` is zero: a zero ceiling means no
/// collateral is currently valued (a freshly created vault), which is an
/// expected state rather than an error, and never silently becomes `0` or
/// `NaN`.
///
/// # Example
///
/// ```rust
/// use papr_rs_core::ltv::compute_ltv;
/// use alloy_primitives::U256;
///
/// let debt = U256::from(500_000_000_000_000_000u64); // 0.5
/// let ceiling = U256::from(2_000_000_000_000_000_000u64); // 2.0
/// let max_ltv = U256::from(500_000_000_000_000_000u64); // 50%
/// let ltv = compute_ltv(debt, ceiling, max_ltv, 18).unwrap();
/// assert!((ltv - 0.125).abs() < 1e-12);
/// ```
pub fn compute_ltv(
    vault_debt: U256,
    max_debt_for_vault: U256,
    max_ltv: U256,
    decimals: u32,
) -> Option<f64> {
    if max_debt_for_vault.is_zero() {
        return None;
    }

    let debt = scaled_to_f64(vault_debt, decimals);
    let ceiling = scaled_to_f64(max_debt_for_vault, decimals);

    Some(debt / ceiling * wad_to_f64(max_ltv))
}

/// Returns the 100%-utilization debt ceiling for a collateral valuation.
///
/// `total_collateral_value` is the summed valuation of the vault's
/// collateral (unit value times count, in WAD), and `max_ltv` the protocol's
/// WAD fraction; the result is their floor-rounded WAD product, matching the
/// contract's max-debt computation.
pub fn max_debt(total_collateral_value: U256, max_ltv: U256) -> U256 {
    w_mul_down(total_collateral_value, max_ltv)
}

//! Dutch auction pricing for liquidated collateral.
//!
//! papr liquidates NFT collateral through exponential-decay Dutch auctions:
//! the price loses a fixed fraction (`per_period_decay`) of its value each
//! period, and decays linearly toward the next step inside a partial period.
//! The discrete stage uses integer WAD exponentiation so results agree with
//! the on-chain auction contract's decimal output.
//!
//! # Example
//!
//! ```rust
//! use papr_rs_core::auction::current_price;
//! use papr_rs_core::math::WAD;
//! use alloy_primitives::U256;
//!
//! // 1.0 starting price, 10% decay per one-hour period
//! let decay = U256::from(100_000_000_000_000_000u64);
//! let price = current_price(WAD, 3600, 3600, decay).unwrap();
//! assert_eq!(price, U256::from(900_000_000_000_000_000u64));
//! ```

use alloy_primitives::U256;

use crate::error::PricingError;
use crate::math::{mul_div_down, w_mul_down, w_pow, WAD};

/// Parameters of a decaying Dutch auction.
///
/// `per_period_decay` is the WAD fraction of price *lost* per full period
/// (the on-chain `perPeriodAuctionDecayWAD`), so the price retains
/// `WAD - per_period_decay` of its value each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Auction {
    /// Starting price (WAD-scaled)
    pub start_price: U256,
    /// Length of one decay period in seconds
    pub period_duration: u64,
    /// Fraction of price lost per full period (WAD-scaled, in [0, WAD])
    pub per_period_decay: U256,
}

impl Auction {
    /// Creates an auction, validating the decay schedule once up front.
    pub fn new(
        start_price: U256,
        period_duration: u64,
        per_period_decay: U256,
    ) -> Result<Self, PricingError> {
        if period_duration == 0 {
            return Err(PricingError::ZeroPeriodDuration);
        }
        if per_period_decay > WAD {
            return Err(PricingError::DecayOutOfRange {
                decay: per_period_decay,
            });
        }
        Ok(Self {
            start_price,
            period_duration,
            per_period_decay,
        })
    }

    /// Returns the auction price after `seconds_elapsed` seconds.
    ///
    /// Infallible because the schedule was validated in [`Auction::new`].
    pub fn price_at(&self, seconds_elapsed: u64) -> U256 {
        decayed_price(
            self.start_price,
            seconds_elapsed,
            self.period_duration,
            self.per_period_decay,
        )
    }
}

/// Computes the current price of a decaying Dutch auction.
///
/// The decay is applied in two stages:
/// 1. the per-period retained multiplier `WAD - per_period_decay`, raised to
///    the number of *full* elapsed periods (integer WAD exponentiation,
///    floor-rescaled at every step);
/// 2. a linear interpolation across the partial period, multiplying by
///    `WAD - per_period_decay * remainder / period_duration`.
///
/// At `seconds_elapsed == 0` the start price is returned exactly, and at an
/// exact period boundary no fractional adjustment is applied. The price is
/// non-increasing in elapsed time and continuous across period boundaries.
///
/// # Errors
///
/// [`PricingError::ZeroPeriodDuration`] if `period_duration` is zero, and
/// [`PricingError::DecayOutOfRange`] if `per_period_decay` exceeds WAD
/// (per-period growth is outside the auction contract's domain).
pub fn current_price(
    start_price: U256,
    seconds_elapsed: u64,
    period_duration: u64,
    per_period_decay: U256,
) -> Result<U256, PricingError> {
    if period_duration == 0 {
        return Err(PricingError::ZeroPeriodDuration);
    }
    if per_period_decay > WAD {
        return Err(PricingError::DecayOutOfRange {
            decay: per_period_decay,
        });
    }
    Ok(decayed_price(
        start_price,
        seconds_elapsed,
        period_duration,
        per_period_decay,
    ))
}

fn decayed_price(
    start_price: U256,
    seconds_elapsed: u64,
    period_duration: u64,
    per_period_decay: U256,
) -> U256 {
    let full_periods = seconds_elapsed / period_duration;
    let remainder = seconds_elapsed % period_duration;

    let retained = WAD - per_period_decay;
    let mut price = w_mul_down(start_price, w_pow(retained, full_periods));

    if remainder > 0 {
        // Linear decay toward the next step within the partial period
        let partial = WAD
            - mul_div_down(
                per_period_decay,
                U256::from(remainder),
                U256::from(period_duration),
            );
        price = w_mul_down(price, partial);
    }

    price
}

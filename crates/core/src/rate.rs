//! Interest-rate projection from the papr controller's target/mark gap.
//!
//! papr sets interest rates through a proportional control loop: when the
//! market price of the papr token ("mark") drifts from the controller's
//! internal target price, the contract moves the target toward the mark over
//! one funding period. This module projects the annualized rate implied by
//! that correction, clamped to the contract's per-token target/mark ratio
//! band, so the UI can display "projected APR" and flag when the controller
//! is pinned at its rate limit.
//!
//! Rates here are display-level approximations and use `f64` deliberately;
//! only the auction pricer needs contract-exact fixed-point output.
//!
//! # Example
//!
//! ```rust
//! use papr_rs_core::rate::{project_apr, RateParams};
//!
//! let params = RateParams::default();
//! // Mark trading right at target: no correction needed
//! let rate = project_apr(1.0, 1.0, 600, &params).unwrap();
//! assert_eq!(rate.apr, 0.0);
//! assert!(!rate.clamped);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::math::SECONDS_PER_YEAR;

/// papr's default funding period: one quarter (90 days) in seconds
pub const DEFAULT_FUNDING_PERIOD_SECONDS: u64 = 90 * 86_400;

/// papr's default lower bound on the target/mark ratio
pub const DEFAULT_MIN_TARGET_MARK_RATIO: f64 = 0.5;

/// papr's default upper bound on the target/mark ratio
pub const DEFAULT_MAX_TARGET_MARK_RATIO: f64 = 3.0;

/// Per-token rate-projection parameters.
///
/// These mirror the controller contract's immutable deployment parameters
/// and are loaded from per-network configuration, keyed by token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateParams {
    /// Lower clamp on target/mark before projecting the correction
    pub min_target_mark_ratio: f64,
    /// Upper clamp on target/mark before projecting the correction
    pub max_target_mark_ratio: f64,
    /// Funding period over which the controller corrects the gap, in seconds
    pub funding_period_seconds: u64,
}

impl Default for RateParams {
    fn default() -> Self {
        Self {
            min_target_mark_ratio: DEFAULT_MIN_TARGET_MARK_RATIO,
            max_target_mark_ratio: DEFAULT_MAX_TARGET_MARK_RATIO,
            funding_period_seconds: DEFAULT_FUNDING_PERIOD_SECONDS,
        }
    }
}

impl RateParams {
    fn validate(&self) -> Result<(), PricingError> {
        if self.funding_period_seconds == 0 {
            return Err(PricingError::ZeroFundingPeriod);
        }
        if !(self.min_target_mark_ratio > 0.0
            && self.min_target_mark_ratio <= self.max_target_mark_ratio
            && self.max_target_mark_ratio.is_finite())
        {
            return Err(PricingError::InvalidRatioBounds {
                min: self.min_target_mark_ratio,
                max: self.max_target_mark_ratio,
            });
        }
        Ok(())
    }

    /// Returns the `(min_apr, max_apr)` saturation band for a projection
    /// horizon: the APRs projected when the target/mark ratio is pinned at
    /// its lower and upper bound respectively.
    pub fn apr_bounds(&self, horizon_seconds: u64) -> Result<(f64, f64), PricingError> {
        self.validate()?;
        if horizon_seconds == 0 {
            return Err(PricingError::ZeroProjectionHorizon);
        }
        Ok((
            annualized(self.min_target_mark_ratio, horizon_seconds, self),
            annualized(self.max_target_mark_ratio, horizon_seconds, self),
        ))
    }
}

/// A projected annualized rate, as a fraction (`-2.81` means -281% APR).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRate {
    /// The projected APR after clamping the target/mark ratio
    pub apr: f64,
    /// Whether the ratio hit a bound (the controller is at its rate limit)
    pub clamped: bool,
}

/// Projects the annualized rate implied by the current target/mark gap.
///
/// The target/mark ratio is clamped to the token's configured band, the
/// controller's target growth over `horizon_seconds` is compounded at the
/// funding-period rate, and the resulting fractional change is annualized:
///
/// ```text
/// ratio  = clamp(target / mark, min_ratio, max_ratio)
/// growth = ratio^(horizon / funding_period)
/// apr    = (growth - 1) * seconds_per_year / horizon
/// ```
///
/// `mark == target` projects exactly zero. A mark far above or below target
/// saturates at the band and reports `clamped`, never an error; precision is
/// better than ten significant digits across the ratio range the controller
/// can produce.
///
/// # Errors
///
/// Invalid-parameter errors for non-positive or non-finite `mark`/`target`,
/// a zero horizon, or malformed [`RateParams`].
pub fn project_apr(
    mark: f64,
    target: f64,
    horizon_seconds: u64,
    params: &RateParams,
) -> Result<ProjectedRate, PricingError> {
    params.validate()?;
    if horizon_seconds == 0 {
        return Err(PricingError::ZeroProjectionHorizon);
    }
    if !(mark.is_finite() && mark > 0.0) {
        return Err(PricingError::InvalidMark { mark });
    }
    if !(target.is_finite() && target > 0.0) {
        return Err(PricingError::InvalidTarget { target });
    }

    let ratio = target / mark;
    let bounded = ratio.clamp(params.min_target_mark_ratio, params.max_target_mark_ratio);

    Ok(ProjectedRate {
        apr: annualized(bounded, horizon_seconds, params),
        clamped: bounded != ratio,
    })
}

/// Projects the controller's target price after `horizon_seconds`.
///
/// Uses the same clamped compounded growth as [`project_apr`]; the papr UI
/// shows this as the "new target" next to the projected rate.
pub fn projected_new_target(
    mark: f64,
    target: f64,
    horizon_seconds: u64,
    params: &RateParams,
) -> Result<f64, PricingError> {
    params.validate()?;
    if horizon_seconds == 0 {
        return Err(PricingError::ZeroProjectionHorizon);
    }
    if !(mark.is_finite() && mark > 0.0) {
        return Err(PricingError::InvalidMark { mark });
    }
    if !(target.is_finite() && target > 0.0) {
        return Err(PricingError::InvalidTarget { target });
    }

    let ratio = (target / mark).clamp(params.min_target_mark_ratio, params.max_target_mark_ratio);
    Ok(target * growth_over(ratio, horizon_seconds, params))
}

fn growth_over(ratio: f64, horizon_seconds: u64, params: &RateParams) -> f64 {
    ratio.powf(horizon_seconds as f64 / params.funding_period_seconds as f64)
}

fn annualized(ratio: f64, horizon_seconds: u64, params: &RateParams) -> f64 {
    (growth_over(ratio, horizon_seconds, params) - 1.0) * SECONDS_PER_YEAR as f64
        / horizon_seconds as f64
}

/// Token-keyed rate parameters for a deployment.
///
/// A thin lookup over [`RateParams`], deserialized from per-network
/// configuration. Not global state; callers own the instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateConfig {
    tokens: HashMap<String, RateParams>,
}

impl RateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers parameters for a token, replacing any previous entry.
    pub fn insert(&mut self, token: impl Into<String>, params: RateParams) {
        self.tokens.insert(token.into(), params);
    }

    /// Returns the parameters configured for a token, if any.
    pub fn get(&self, token: &str) -> Option<&RateParams> {
        self.tokens.get(token)
    }

    /// Projects the APR for a token using its configured parameters.
    ///
    /// # Errors
    ///
    /// [`PricingError::UnknownToken`] when the token has no configuration,
    /// plus the [`project_apr`] parameter errors.
    pub fn project_apr(
        &self,
        token: &str,
        mark: f64,
        target: f64,
        horizon_seconds: u64,
    ) -> Result<ProjectedRate, PricingError> {
        let params = self.get(token).ok_or_else(|| PricingError::UnknownToken {
            token: token.to_string(),
        })?;
        project_apr(mark, target, horizon_seconds, params)
    }
}

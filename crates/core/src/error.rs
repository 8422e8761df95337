//! Error types for the pricing library.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised when a precondition is violated.
///
/// Mathematically indeterminate results caused by legitimate on-chain state
/// (e.g. a zero max-debt ceiling on a fresh vault) are signalled with
/// `Option::None` by the relevant functions, not with a variant here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Auction period duration of zero would divide by zero
    #[error("Auction period duration must be positive")]
    ZeroPeriodDuration,

    /// Per-period decay above WAD would mean negative price retention
    #[error("Per-period decay {decay} exceeds WAD")]
    DecayOutOfRange { decay: U256 },

    /// Mark price must be a positive finite number
    #[error("Invalid mark price: {mark}")]
    InvalidMark { mark: f64 },

    /// Target price must be a positive finite number
    #[error("Invalid target price: {target}")]
    InvalidTarget { target: f64 },

    /// Projection horizon of zero seconds is undefined
    #[error("Projection horizon must be positive")]
    ZeroProjectionHorizon,

    /// Funding period of zero seconds is undefined
    #[error("Funding period must be positive")]
    ZeroFundingPeriod,

    /// Target/mark ratio bounds must satisfy 0 < min <= max
    #[error("Invalid target/mark ratio bounds: min {min}, max {max}")]
    InvalidRatioBounds { min: f64, max: f64 },

    /// No rate parameters configured for the requested token
    #[error("No rate parameters configured for token {token}")]
    UnknownToken { token: String },

    /// Time series points must be ordered by ascending timestamp
    #[error("Time series not sorted: timestamp {timestamp} at index {index} precedes its predecessor")]
    UnsortedSeries { index: usize, timestamp: u64 },
}

//! papr pricing and rate math
//!
//! This crate implements the numeric core used by papr front-end tooling:
//! the financial computations where a bug would silently produce a wrong
//! number rather than a broken page. Everything else (wallet connection,
//! subgraph queries, rendering) lives outside this crate and supplies the
//! inputs.
//!
//! # Overview
//!
//! Three independent components, all pure synchronous functions:
//!
//! - **Auction pricing** ([`auction`]) - the current price of a decaying
//!   Dutch auction, in contract-exact WAD fixed point.
//! - **Rate projection** ([`rate`]) - the annualized rate implied by the
//!   controller's target/mark gap, clamped to per-token bounds.
//! - **LTV and valuation lookups** ([`ltv`], [`series`]) - loan-to-value
//!   ratios against collateral debt ceilings, and nearest-neighbor search
//!   over historical valuation series.
//!
//! Fixed-point values use the WAD convention (18 decimals, [`math::WAD`])
//! and stay in `U256` wherever the result must agree with on-chain
//! arithmetic; display-level rates and ratios use `f64`.
//!
//! # Example
//!
//! ```rust
//! use papr_rs_core::{auction, rate::{self, RateParams}, math::WAD};
//! use alloy_primitives::U256;
//!
//! // Price of a liquidation auction after 90 minutes of hourly 10% decay
//! let decay = U256::from(100_000_000_000_000_000u64);
//! let price = auction::current_price(WAD, 5_400, 3_600, decay).unwrap();
//! assert!(price < WAD);
//!
//! // Projected APR with the mark trading 2% above target
//! let projected = rate::project_apr(1.02, 1.0, 600, &RateParams::default()).unwrap();
//! assert!(projected.apr < 0.0 && !projected.clamped);
//! ```

pub mod auction;
pub mod error;
pub mod ltv;
pub mod math;
pub mod rate;
pub mod series;

// Re-export commonly used types
pub use error::PricingError;

// Auction exports
pub use auction::{current_price, Auction};

// Math exports
pub use math::{SECONDS_PER_YEAR, WAD};

// Rate exports
pub use rate::{
    project_apr, projected_new_target, ProjectedRate, RateConfig, RateParams,
    DEFAULT_FUNDING_PERIOD_SECONDS, DEFAULT_MAX_TARGET_MARK_RATIO, DEFAULT_MIN_TARGET_MARK_RATIO,
};

// LTV exports
pub use ltv::{compute_ltv, max_debt};

// Series exports
pub use series::{find_closest_index, PricePoint, TimeSeries};

//----------------------------------------
// Root lib
//----------------------------------------
//! Utility functions for planning two-proportion experiments (A/B tests):
//! required sample size for a given baseline conversion rate and relative
//! minimum detectable effect, and the power, significance level or
//! detectable effect implied by fixed group sizes.
//!
//! ```
//! use abcompute::compute::{compute_sample_size, CalculationInput, Sidedness};
//!
//! let res = compute_sample_size(&CalculationInput {
//!     baseline_rate: 5.,
//!     relative_effect: 30.,
//!     alpha: 0.05,
//!     power: 0.8,
//!     sidedness: Sidedness::TwoSided,
//!     split_ratio: 0.5,
//! })
//! .unwrap();
//! assert_eq!(res.total_size, res.control_size + res.test_size);
//! ```

/// This module houses the public API for sample size, power, significance
/// level, detectable effect and duration computations
pub mod compute;
mod computation_target;
mod duration;
/// This module contains error types
pub mod error;
mod normal;
mod sample_size;
mod sidedness;
mod trial_characteristics;

//----------------------------------------
// sample size mod
//----------------------------------------
pub mod compute_ss;
pub mod compute_ss_range;
pub mod error;
pub mod types;
pub(crate) mod validate;

//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::computation_target::ComputationTarget;
pub use crate::duration::expected_duration::expected_duration_days;
pub use crate::normal::std_normal::{std_normal_cdf, std_normal_pdf, std_normal_quantile};
pub use crate::sample_size::compute_ss::compute_sample_size;
pub use crate::sample_size::compute_ss_range::compute_ss_range;
pub use crate::sample_size::types::{CalculationInput, CalculationResult, SampleSizeRow};
pub use crate::sidedness::Sidedness;
pub use crate::trial_characteristics::compute_alpha::compute_alpha;
pub use crate::trial_characteristics::compute_mde::compute_mde;
pub use crate::trial_characteristics::compute_power::compute_power;

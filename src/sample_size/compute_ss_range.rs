use itertools::iproduct;
use log::trace;

use crate::error::AbcomputeErr;
use crate::sample_size::compute_ss::compute_sample_size;
use crate::sample_size::types::{CalculationInput, SampleSizeRow};

/// Sample sizes over a grid of relative effects and powers, with every other
/// parameter taken from `input`. Rows are ordered by effect first, then by
/// power. The first invalid combination aborts the sweep.
pub fn compute_ss_range(
    input: &CalculationInput,
    relative_effects: &[f64],
    powers: &[f64],
) -> Result<Vec<SampleSizeRow>, AbcomputeErr> {
    iproduct!(relative_effects.iter(), powers.iter())
        .map(|(&relative_effect, &power)| -> Result<SampleSizeRow, AbcomputeErr> {
            let result = compute_sample_size(&CalculationInput {
                relative_effect,
                power,
                ..*input
            })?;
            trace!("mde = {relative_effect}, power = {power}: {result:?}");
            Ok(SampleSizeRow {
                relative_effect,
                power,
                result,
            })
        })
        .collect()
}

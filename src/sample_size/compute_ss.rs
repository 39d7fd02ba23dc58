use log::debug;

use crate::error::AbcomputeErr;
use crate::normal::std_normal::std_normal_quantile;
use crate::sample_size::error::InputError;
use crate::sample_size::types::{CalculationInput, CalculationResult};
use crate::sample_size::validate::{
    check_alpha, check_power, check_split_ratio, critical_sum, proportions, Proportions,
    MAX_GROUP_SIZE,
};

/// Computes control and test group sizes for a two-proportion z-test.
///
/// The variance term uses the baseline proportion only, i.e.
/// n = 2 (z_alpha + z_beta)^2 p1 (1 - p1) / delta^2 per group under equal
/// allocation. Unequal allocation with test:control ratio k inflates the
/// control group by (1 + 1/k) / 2 and sizes the test group as k times that.
/// Both sizes are rounded up.
pub fn compute_sample_size(input: &CalculationInput) -> Result<CalculationResult, AbcomputeErr> {
    let CalculationInput {
        baseline_rate,
        relative_effect,
        alpha,
        power,
        sidedness,
        split_ratio,
    } = *input;

    //----------------------------------------
    // Validation, first failure wins
    //----------------------------------------
    let props = proportions(baseline_rate, relative_effect)?;
    check_alpha(alpha)?;
    check_power(power)?;
    check_split_ratio(split_ratio)?;
    let delta = props.delta()?;
    let Proportions { p1, p2 } = props;

    //----------------------------------------
    // Per-group size under equal allocation
    //----------------------------------------
    let z_alpha = std_normal_quantile(sidedness.critical_probability(alpha))?;
    let z_beta = std_normal_quantile(power)?;
    let tail_alpha = 1. - sidedness.critical_probability(alpha);
    let z_sum = critical_sum(z_alpha, z_beta, power, tail_alpha)?;
    let n_equal = 2. * z_sum.powi(2) * p1 * (1. - p1) / delta.powi(2);
    debug!("p1 = {p1}, p2 = {p2}, z_alpha = {z_alpha}, z_beta = {z_beta}, n_equal = {n_equal}");

    //----------------------------------------
    // Unequal split adjustment
    //----------------------------------------
    // k = test:control ratio
    let k = split_ratio / (1. - split_ratio);
    let control_size = (n_equal * (1. + 1. / k) / 2.).ceil();
    let test_size = (control_size * k).ceil();

    // Fails for NaN as well
    if !(control_size + test_size <= MAX_GROUP_SIZE) {
        return Err(InputError::SampleSizeTooLarge(control_size + test_size).into());
    }
    if control_size < 1. || test_size < 1. {
        return Err(InputError::EmptyGroup {
            control_size: control_size as u64,
            test_size: test_size as u64,
        }
        .into());
    }
    debug!("k = {k}, control = {control_size}, test = {test_size}");

    Ok(CalculationResult::new(control_size as u64, test_size as u64))
}

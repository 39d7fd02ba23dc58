use log::debug;

use crate::error::AbcomputeErr;
use crate::normal::std_normal::std_normal_quantile;
use crate::sample_size::error::InputError;
use crate::sample_size::validate::{
    baseline_proportion, check_alpha, check_group_sizes, check_power, critical_sum, std_error,
};
use crate::sidedness::Sidedness;

/// Smallest relative lift (in percent) detectable with the given group sizes
pub fn compute_mde(
    baseline_rate: f64,
    alpha: f64,
    power: f64,
    sidedness: Sidedness,
    control_size: u64,
    test_size: u64,
) -> Result<f64, AbcomputeErr> {
    let p1 = baseline_proportion(baseline_rate)?;
    check_alpha(alpha)?;
    check_power(power)?;
    check_group_sizes(control_size, test_size)?;

    let z_alpha = std_normal_quantile(sidedness.critical_probability(alpha))?;
    let z_beta = std_normal_quantile(power)?;
    let tail_alpha = 1. - sidedness.critical_probability(alpha);
    let z_sum = critical_sum(z_alpha, z_beta, power, tail_alpha)?;
    let delta = z_sum * std_error(p1, control_size, test_size);
    debug!("p1 = {p1}, detectable delta = {delta}");

    let p2 = p1 + delta;
    if p2 > 1. {
        return Err(InputError::EffectUnreachable(p2).into());
    }
    Ok(100. * delta / p1)
}

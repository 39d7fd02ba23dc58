use crate::error::AbcomputeErr;
use crate::normal::std_normal::{std_normal_cdf, std_normal_quantile};
use crate::sample_size::validate::{check_group_sizes, check_power, proportions, std_error};
use crate::sidedness::Sidedness;

/// Significance level at which the given group sizes reach `power`
pub fn compute_alpha(
    baseline_rate: f64,
    relative_effect: f64,
    power: f64,
    sidedness: Sidedness,
    control_size: u64,
    test_size: u64,
) -> Result<f64, AbcomputeErr> {
    let props = proportions(baseline_rate, relative_effect)?;
    check_power(power)?;
    check_group_sizes(control_size, test_size)?;
    let delta = props.delta()?;

    let z_beta = std_normal_quantile(power)?;
    let se = std_error(props.p1, control_size, test_size);
    // => z_alpha = delta / se - z_beta
    let z_alpha = delta / se - z_beta;

    // Upper tail beyond z_alpha, computed as Phi(-z) to keep precision
    Ok(sidedness.alpha_from_tail(std_normal_cdf(-z_alpha)))
}

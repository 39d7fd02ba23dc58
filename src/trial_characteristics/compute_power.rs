use log::debug;

use crate::error::AbcomputeErr;
use crate::normal::std_normal::{std_normal_cdf, std_normal_quantile};
use crate::sample_size::validate::{check_alpha, check_group_sizes, proportions, std_error};
use crate::sidedness::Sidedness;

/// Power of a two-proportion test with the given group sizes. Only the
/// critical region in the direction of the effect is counted.
pub fn compute_power(
    baseline_rate: f64,
    relative_effect: f64,
    alpha: f64,
    sidedness: Sidedness,
    control_size: u64,
    test_size: u64,
) -> Result<f64, AbcomputeErr> {
    let props = proportions(baseline_rate, relative_effect)?;
    check_alpha(alpha)?;
    check_group_sizes(control_size, test_size)?;
    let delta = props.delta()?;

    let z_alpha = std_normal_quantile(sidedness.critical_probability(alpha))?;
    let se = std_error(props.p1, control_size, test_size);
    let z_beta = delta / se - z_alpha;
    debug!("se = {se}, z_alpha = {z_alpha}, z_beta = {z_beta}");

    Ok(std_normal_cdf(z_beta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::sample_size::compute_ss::compute_sample_size;
    use crate::sample_size::types::CalculationInput;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_log::test;

    #[test]
    fn compute_power_at_computed_size() {
        // See compute_ss equal_split_two_sided
        let power = compute_power(5., 30., 0.05, Sidedness::TwoSided, 3314, 3314)
            .expect("failed to compute power");
        // Rounding up the sample size gives slightly more than nominal power
        assert!(power >= 0.8);
        assert!(power - 0.8 < 0.001);
    }

    #[test]
    fn compute_power_recovers_target() {
        for (split_ratio, target) in [(0.5, 0.7), (0.2, 0.8), (0.9, 0.95)] {
            let input = CalculationInput {
                baseline_rate: 12.,
                relative_effect: -15.,
                power: target,
                split_ratio,
                ..CalculationInput::default()
            };
            let res = compute_sample_size(&input).unwrap();
            let power = compute_power(
                input.baseline_rate,
                input.relative_effect,
                input.alpha,
                input.sidedness,
                res.control_size,
                res.test_size,
            )
            .unwrap();
            assert!(power >= target, "split {split_ratio}: {power} < {target}");
            assert!(power - target < 0.01);
        }
    }

    #[test]
    fn compute_power_small_groups() {
        let power = compute_power(5., 30., 0.05, Sidedness::TwoSided, 10, 10).unwrap();
        assert!(power < 0.05);
    }

    #[test]
    fn compute_power_errors() {
        assert_eq!(
            compute_power(5., 0., 0.05, Sidedness::TwoSided, 100, 100),
            Err(AbcomputeErr::Input(InputError::ZeroEffectSize))
        );
        assert!(matches!(
            compute_power(5., 30., 0.05, Sidedness::TwoSided, 100, 0),
            Err(AbcomputeErr::Input(InputError::EmptyGroup { .. }))
        ));
        assert_eq!(
            compute_power(5., 30., 0., Sidedness::OneSided, 100, 100),
            Err(AbcomputeErr::Input(InputError::SignificanceOutOfRange(0.)))
        );
    }

    // Pooled two-proportion z statistic
    fn z_statistic(successes_ctrl: u64, n_ctrl: u64, successes_trt: u64, n_trt: u64) -> f64 {
        let (n_c, n_t) = (n_ctrl as f64, n_trt as f64);
        let p_c = successes_ctrl as f64 / n_c;
        let p_t = successes_trt as f64 / n_t;
        let pooled = (successes_ctrl + successes_trt) as f64 / (n_c + n_t);
        (p_t - p_c) / (pooled * (1. - pooled) * (1. / n_c + 1. / n_t)).sqrt()
    }

    #[test]
    fn simulated_power_close_to_target() {
        let input = CalculationInput {
            baseline_rate: 20.,
            relative_effect: 20.,
            ..CalculationInput::default()
        };
        let res = compute_sample_size(&input).unwrap();
        let z_crit = std_normal_quantile(0.975).unwrap();

        let mut rng = StdRng::seed_from_u64(24601);
        let n_sims = 400;
        let mut rejections = 0;
        for _ in 0..n_sims {
            let ctrl = (0..res.control_size).filter(|_| rng.gen_bool(0.2)).count() as u64;
            let trt = (0..res.test_size).filter(|_| rng.gen_bool(0.24)).count() as u64;
            if z_statistic(ctrl, res.control_size, trt, res.test_size).abs() > z_crit {
                rejections += 1;
            }
        }
        let empirical_power = rejections as f64 / n_sims as f64;
        // Baseline-only variance is optimistic when the test rate is higher,
        // so the realised power sits a little under 0.8
        assert!(
            empirical_power > 0.68 && empirical_power < 0.9,
            "empirical power {empirical_power}"
        );
    }
}

//----------------------------------------
// Input validation shared by all computation targets
//----------------------------------------
// Comparisons are written so that NaN fails every check.
use crate::error::AbcomputeErr;
use crate::sample_size::error::InputError;

/// Largest group size that f64 still represents exactly
pub(crate) const MAX_GROUP_SIZE: f64 = 9_007_199_254_740_992.;

/// Control and test conversion probabilities derived from percentages
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Proportions {
    pub p1: f64,
    pub p2: f64,
}

impl Proportions {
    /// Absolute effect size; errors when the two rates coincide
    pub fn delta(&self) -> Result<f64, AbcomputeErr> {
        let delta = (self.p2 - self.p1).abs();
        if delta == 0. {
            return Err(InputError::ZeroEffectSize.into());
        }
        Ok(delta)
    }
}

pub(crate) fn baseline_proportion(baseline_rate: f64) -> Result<f64, AbcomputeErr> {
    let p1 = baseline_rate / 100.;
    if !(p1 > 0. && p1 < 1.) {
        return Err(InputError::BaselineRateOutOfRange(baseline_rate).into());
    }
    Ok(p1)
}

pub(crate) fn proportions(
    baseline_rate: f64,
    relative_effect: f64,
) -> Result<Proportions, AbcomputeErr> {
    let p1 = baseline_proportion(baseline_rate)?;
    let p2 = p1 * (1. + relative_effect / 100.);
    if !(p2 > 0. && p2 <= 1.) {
        return Err(InputError::TestRateInvalid(p2).into());
    }
    Ok(Proportions { p1, p2 })
}

pub(crate) fn check_alpha(alpha: f64) -> Result<(), AbcomputeErr> {
    if !(alpha > 0. && alpha < 1.) {
        return Err(InputError::SignificanceOutOfRange(alpha).into());
    }
    Ok(())
}

pub(crate) fn check_power(power: f64) -> Result<(), AbcomputeErr> {
    if !(power > 0. && power < 1.) {
        return Err(InputError::PowerOutOfRange(power).into());
    }
    Ok(())
}

pub(crate) fn check_split_ratio(split_ratio: f64) -> Result<(), AbcomputeErr> {
    if !(split_ratio > 0. && split_ratio < 1.) {
        return Err(InputError::SplitRatioOutOfRange(split_ratio).into());
    }
    Ok(())
}

pub(crate) fn check_group_sizes(control_size: u64, test_size: u64) -> Result<(), AbcomputeErr> {
    if control_size == 0 || test_size == 0 {
        return Err(InputError::EmptyGroup {
            control_size,
            test_size,
        }
        .into());
    }
    Ok(())
}

/// z_alpha + z_beta, which must be positive for a test to separate the
/// hypotheses at all
pub(crate) fn critical_sum(
    z_alpha: f64,
    z_beta: f64,
    power: f64,
    tail_alpha: f64,
) -> Result<f64, AbcomputeErr> {
    let sum = z_alpha + z_beta;
    if !(sum > 0.) {
        return Err(InputError::PowerNotAboveSignificance { power, tail_alpha }.into());
    }
    Ok(sum)
}

/// Standard error of the difference in proportions, using the baseline
/// variance for both groups
pub(crate) fn std_error(p1: f64, control_size: u64, test_size: u64) -> f64 {
    (p1 * (1. - p1) * (1. / control_size as f64 + 1. / test_size as f64)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn proportions_from_percentages() {
        let Proportions { p1, p2 } = proportions(5., 30.).unwrap();
        assert_eq!(p1, 0.05);
        assert!((p2 - 0.065).abs() < 1e-15);
    }

    #[test]
    fn negative_effect_is_allowed() {
        let props = proportions(10., -50.).unwrap();
        assert!((props.delta().unwrap() - 0.05).abs() < 1e-15);
    }

    #[test]
    fn baseline_checked_before_test_rate() {
        // Both are invalid, but the baseline is reported
        assert_eq!(
            proportions(150., 500.),
            Err(AbcomputeErr::Input(InputError::BaselineRateOutOfRange(150.)))
        );
    }

    #[test]
    fn test_rate_may_reach_one() {
        assert!(proportions(50., 100.).is_ok());
        assert!(proportions(50., 100.1).is_err());
        assert!(proportions(50., -100.).is_err());
    }

    #[test]
    fn nan_fails_every_check() {
        assert!(baseline_proportion(f64::NAN).is_err());
        assert!(proportions(5., f64::NAN).is_err());
        assert!(check_alpha(f64::NAN).is_err());
        assert!(check_power(f64::NAN).is_err());
        assert!(check_split_ratio(f64::NAN).is_err());
    }

    #[test]
    fn range_checks_exclude_endpoints() {
        for x in [0., 1.] {
            assert!(check_alpha(x).is_err());
            assert!(check_power(x).is_err());
            assert!(check_split_ratio(x).is_err());
        }
        assert!(check_alpha(0.05).is_ok());
        assert!(check_power(0.8).is_ok());
        assert!(check_split_ratio(0.5).is_ok());
    }

    #[test]
    fn zero_effect_error() {
        let props = proportions(5., 0.).unwrap();
        if let Err(e) = props.delta() {
            assert_eq!(
                String::from("while validating inputs: effect size must be non-zero"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn empty_group_error() {
        assert_eq!(
            check_group_sizes(0, 10),
            Err(AbcomputeErr::Input(InputError::EmptyGroup {
                control_size: 0,
                test_size: 10
            }))
        );
        assert!(check_group_sizes(1, 1).is_ok());
    }

    #[test]
    fn critical_sum_must_be_positive() {
        assert_eq!(critical_sum(1.96, 0.84, 0.8, 0.025).unwrap(), 1.96 + 0.84);
        assert_eq!(
            critical_sum(0., 0., 0.5, 0.5),
            Err(AbcomputeErr::Input(InputError::PowerNotAboveSignificance {
                power: 0.5,
                tail_alpha: 0.5
            }))
        );
        assert!(critical_sum(-0.25, -0.52, 0.3, 0.6).is_err());
    }

    #[test]
    fn std_error_equal_groups() {
        // sqrt(0.25 * 2 / 50) = 0.1
        assert!((std_error(0.5, 50, 50) - 0.1).abs() < 1e-15);
    }
}

//----------------------------------------
// input validation errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("baseline conversion rate out of range; got {0}%")]
    BaselineRateOutOfRange(f64),
    #[error("resulting test conversion rate invalid (reduce MDE); got {0}")]
    TestRateInvalid(f64),
    #[error("significance level out of range; got {0}")]
    SignificanceOutOfRange(f64),
    #[error("power out of range; got {0}")]
    PowerOutOfRange(f64),
    #[error("split ratio out of range; got {0}")]
    SplitRatioOutOfRange(f64),
    #[error("effect size must be non-zero")]
    ZeroEffectSize,
    #[error("both groups need at least one subject (control {control_size}, test {test_size})")]
    EmptyGroup { control_size: u64, test_size: u64 },
    #[error("detectable effect pushes the test conversion rate above 100%; got {0}")]
    EffectUnreachable(f64),
    #[error("required sample size is too large to represent; got {0}")]
    SampleSizeTooLarge(f64),
    #[error("power ({power}) must exceed the one-tailed significance level ({tail_alpha})")]
    PowerNotAboveSignificance { power: f64, tail_alpha: f64 },
}

impl From<InputError> for AbcomputeErr {
    fn from(err: InputError) -> Self {
        AbcomputeErr::Input(err)
    }
}

//----------------------------------------
// Duration errors
//----------------------------------------

use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("daily traffic should be positive and finite; got {0}")]
    NonPositiveTraffic(f64),
    #[error("expected duration is too long to represent; got {0} days")]
    DurationTooLong(f64),
}

impl From<DurationError> for AbcomputeErr {
    fn from(err: DurationError) -> Self {
        AbcomputeErr::Duration(err)
    }
}

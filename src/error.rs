//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::duration::error::DurationError;
pub use crate::normal::error::NormalDistErr;
pub use crate::sample_size::error::InputError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AbcomputeErr {
    #[error("while validating inputs: {0}")]
    Input(InputError),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while computing duration: {0}")]
    Duration(DurationError),
}

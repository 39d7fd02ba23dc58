//----------------------------------------
// sample size mod types
//----------------------------------------
use crate::sidedness::Sidedness;

/// Parameters of a two-proportion test. Rates and effects are percentages,
/// everything else is a fraction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalculationInput {
    /// Baseline conversion rate in percent, e.g. 5 for 5%
    pub baseline_rate: f64,
    /// Relative lift to detect in percent, e.g. 30 for +30%
    pub relative_effect: f64,
    pub alpha: f64,
    pub power: f64,
    pub sidedness: Sidedness,
    /// Share of traffic sent to the test group
    pub split_ratio: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        CalculationInput {
            baseline_rate: 5.,
            relative_effect: 30.,
            alpha: 0.05,
            power: 0.8,
            sidedness: Sidedness::TwoSided,
            split_ratio: 0.5,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub control_size: u64,
    pub test_size: u64,
    pub total_size: u64,
}

impl CalculationResult {
    pub(crate) fn new(control_size: u64, test_size: u64) -> Self {
        CalculationResult {
            control_size,
            test_size,
            total_size: control_size + test_size,
        }
    }
}

/// One cell of a sample size sensitivity table
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleSizeRow {
    pub relative_effect: f64,
    pub power: f64,
    pub result: CalculationResult,
}

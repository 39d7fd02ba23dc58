use crate::duration::error::DurationError;
use crate::error::AbcomputeErr;

/// Largest day count that f64 still represents exactly
const MAX_DAYS: f64 = 9_007_199_254_740_992.;

/// Given a total sample size and the number of subjects entering the
/// experiment per day, computes the number of whole days needed to enroll it
pub fn expected_duration_days(total_size: u64, daily_traffic: f64) -> Result<u64, AbcomputeErr> {
    if !(daily_traffic > 0. && daily_traffic.is_finite()) {
        return Err(DurationError::NonPositiveTraffic(daily_traffic).into());
    }
    let days = (total_size as f64 / daily_traffic).ceil();
    if !(days <= MAX_DAYS) {
        return Err(DurationError::DurationTooLong(days).into());
    }
    Ok(days as u64)
}

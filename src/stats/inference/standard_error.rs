//! Standard errors and the argument checks shared by the toolkit.

use crate::stats::error::{StatsError, StatsResult};

/// Standard error of a mean: `std / √n`.
///
/// # Errors
///
/// `InvalidArgument` if `n == 0` or `std` is negative or not finite.
pub fn standard_error_mean(std: f64, n: usize) -> StatsResult<f64> {
    check_sample_size(n)?;
    check_std(std)?;
    Ok(std / (n as f64).sqrt())
}

/// Standard error of a proportion: `√(p(1-p)/n)`.
///
/// # Errors
///
/// `InvalidArgument` if `n == 0` or `p` is outside [0, 1].
pub fn standard_error_proportion(p: f64, n: usize) -> StatsResult<f64> {
    check_sample_size(n)?;
    check_proportion("p", p)?;
    Ok((p * (1.0 - p) / n as f64).sqrt())
}

pub(crate) fn check_sample_size(n: usize) -> StatsResult<()> {
    if n == 0 {
        return Err(StatsError::invalid_argument(
            "n",
            "sample size must be at least 1",
        ));
    }
    Ok(())
}

pub(crate) fn check_std(std: f64) -> StatsResult<()> {
    if !std.is_finite() || std < 0.0 {
        return Err(StatsError::invalid_argument(
            "std",
            format!("standard deviation must be finite and non-negative, got {}", std),
        ));
    }
    Ok(())
}

pub(crate) fn check_proportion(arg: &'static str, p: f64) -> StatsResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::invalid_argument(
            arg,
            format!("proportion must be in [0, 1], got {}", p),
        ));
    }
    Ok(())
}

/// Probabilities such as alpha and confidence level live strictly inside (0, 1).
pub(crate) fn check_open_unit(arg: &'static str, value: f64) -> StatsResult<()> {
    if value.is_nan() || value <= 0.0 || value >= 1.0 {
        return Err(StatsError::invalid_argument(
            arg,
            format!("must be strictly between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

pub(crate) fn check_finite(arg: &'static str, value: f64) -> StatsResult<()> {
    if !value.is_finite() {
        return Err(StatsError::invalid_argument(
            arg,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

/// Success/failure rule for the normal approximation of a proportion.
///
/// An empty sample is an invalid argument rather than a failed rule.
pub(crate) fn check_normal_approximation(
    context: &str,
    p: f64,
    n: usize,
    minimum: f64,
) -> StatsResult<()> {
    check_sample_size(n)?;
    let n_f = n as f64;
    let successes = n_f * p;
    let failures = n_f * (1.0 - p);
    if successes < minimum || failures < minimum {
        log::debug!(
            "{}: normal approximation rejected (n*p = {}, n*(1-p) = {}, minimum {})",
            context,
            successes,
            failures,
            minimum
        );
        return Err(StatsError::Validation {
            context: context.to_string(),
            successes,
            failures,
            minimum,
        });
    }
    Ok(())
}

//! Confidence-interval estimation for a mean and a proportion.
//!
//! Both estimators share one shape:
//!
//! ```text
//! SE     = std / √n            (mean)
//!        = √(p(1-p)/n)         (proportion)
//! crit   = F⁻¹(1 - (1 - confidence)/2)
//! margin = crit · SE
//! CI     = (point - margin, point + margin)
//! ```
//!
//! where F is the reference distribution chosen by
//! [`ReferenceDistribution::select`]. A proportion interval always uses the
//! normal approximation, guarded by the success/failure rule.

use super::standard_error::{
    check_finite, check_normal_approximation, check_open_unit, check_proportion,
    standard_error_mean, standard_error_proportion,
};
use super::types::{
    ConfidenceInterval, DispersionSource, Estimate, InferenceOptions, ProbabilityRange,
    ReferenceDistribution,
};
use crate::stats::error::StatsResult;

/// Confidence interval for a mean.
///
/// # Arguments
///
/// * `mean` - Sample (or population) mean the interval is centred on
/// * `std` - Standard deviation, see `dispersion`
/// * `n` - Sample size
/// * `confidence_level` - e.g. 0.95, strictly between 0 and 1
/// * `dispersion` - Whether `std` is the known population value
/// * `range` - Optional bounds for a probability-in-range query
///
/// # Errors
///
/// `InvalidArgument` for `n == 0`, a negative or non-finite `std`, a
/// confidence level outside (0, 1), an inverted range, or a Student-t
/// reference with fewer than 2 observations.
///
/// # Examples
///
/// ```
/// use inferstat::stats::{estimate_mean, DispersionSource};
///
/// let est = estimate_mean(100.0, 15.0, 25, 0.95, DispersionSource::Sample, None).unwrap();
/// assert_eq!(est.reference.df(), Some(24.0));
/// assert!((est.margin_of_error - 6.1917).abs() < 1e-4);
/// ```
pub fn estimate_mean(
    mean: f64,
    std: f64,
    n: usize,
    confidence_level: f64,
    dispersion: DispersionSource,
    range: Option<ProbabilityRange>,
) -> StatsResult<Estimate> {
    estimate_mean_with(
        mean,
        std,
        n,
        confidence_level,
        dispersion,
        range,
        &InferenceOptions::default(),
    )
}

/// [`estimate_mean`] with explicit options.
pub fn estimate_mean_with(
    mean: f64,
    std: f64,
    n: usize,
    confidence_level: f64,
    dispersion: DispersionSource,
    range: Option<ProbabilityRange>,
    options: &InferenceOptions,
) -> StatsResult<Estimate> {
    check_finite("mean", mean)?;
    let se = standard_error_mean(std, n)?;
    let reference = ReferenceDistribution::select_with(n, dispersion, options)?;
    interval_estimate(mean, se, reference, confidence_level, range)
}

/// Confidence interval for a proportion (normal approximation).
///
/// # Errors
///
/// `Validation` when `n·p < 10` or `n·(1-p) < 10` (threshold from
/// [`InferenceOptions::min_expected_count`]); `InvalidArgument` for `n == 0`,
/// `p` outside [0, 1], a confidence level outside (0, 1) or an inverted range.
pub fn estimate_proportion(
    p: f64,
    n: usize,
    confidence_level: f64,
    range: Option<ProbabilityRange>,
) -> StatsResult<Estimate> {
    estimate_proportion_with(p, n, confidence_level, range, &InferenceOptions::default())
}

/// [`estimate_proportion`] with explicit options.
pub fn estimate_proportion_with(
    p: f64,
    n: usize,
    confidence_level: f64,
    range: Option<ProbabilityRange>,
    options: &InferenceOptions,
) -> StatsResult<Estimate> {
    check_proportion("p", p)?;
    check_normal_approximation("proportion estimation", p, n, options.min_expected_count)?;
    let se = standard_error_proportion(p, n)?;
    interval_estimate(p, se, ReferenceDistribution::Normal, confidence_level, range)
}

fn interval_estimate(
    point: f64,
    se: f64,
    reference: ReferenceDistribution,
    confidence_level: f64,
    range: Option<ProbabilityRange>,
) -> StatsResult<Estimate> {
    check_open_unit("confidence_level", confidence_level)?;
    if let Some(range) = &range {
        range.validate()?;
    }

    let critical_value = reference.critical_value((1.0 - confidence_level) / 2.0)?;
    let margin_of_error = critical_value * se;
    let interval = ConfidenceInterval {
        lower: point - margin_of_error,
        upper: point + margin_of_error,
    };

    let probability = match range {
        Some(range) => Some(probability_in_range(point, se, reference, range)?),
        None => None,
    };

    log::debug!(
        "estimate {} ± {} ({} critical value {}, SE {})",
        point,
        margin_of_error,
        reference,
        critical_value,
        se
    );

    Ok(Estimate {
        point,
        standard_error: se,
        reference,
        critical_value,
        margin_of_error,
        interval,
        probability,
    })
}

/// Mass of the reference distribution, located at `point` and scaled by
/// `se`, that falls inside `range`.
fn probability_in_range(
    point: f64,
    se: f64,
    reference: ReferenceDistribution,
    range: ProbabilityRange,
) -> StatsResult<f64> {
    if se == 0.0 {
        // Degenerate sampling distribution: all mass sits on the point.
        let inside = range.start <= point && point <= range.end;
        return Ok(if inside { 1.0 } else { 0.0 });
    }
    let lo = reference.cdf((range.start - point) / se)?;
    let hi = reference.cdf((range.end - point) / se)?;
    Ok(hi - lo)
}

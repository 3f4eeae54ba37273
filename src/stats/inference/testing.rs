//! One-sample significance tests for a mean and a proportion.
//!
//! ```text
//! statistic = (estimate - hypothesized) / SE
//!
//! p-value   = 2 · P(T > |statistic|)   two-sided
//!           =     P(T < statistic)     left-tailed
//!           =     P(T > statistic)     right-tailed
//! ```
//!
//! Upper-tail probabilities go through the survival function so that very
//! large statistics keep meaningful p-values instead of rounding to zero.

use super::standard_error::{
    check_finite, check_normal_approximation, check_open_unit, check_proportion,
    standard_error_mean, standard_error_proportion,
};
use super::types::{
    Decision, DispersionSource, InferenceOptions, ReferenceDistribution, TailMode, TestOutcome,
};
use crate::stats::error::{StatsError, StatsResult};

/// p-value of a standardized statistic under `reference` for the given tail.
pub fn p_value(
    statistic: f64,
    reference: ReferenceDistribution,
    tail: TailMode,
) -> StatsResult<f64> {
    let p = match tail {
        TailMode::TwoSided => 2.0 * reference.sf(statistic.abs())?,
        TailMode::Left => reference.cdf(statistic)?,
        TailMode::Right => reference.sf(statistic)?,
    };
    Ok(p.min(1.0))
}

/// Z or T test of a mean against a hypothesized value.
///
/// Uses the normal reference when `n` is large or the population standard
/// deviation is known, Student-t with `n - 1` degrees of freedom otherwise.
///
/// # Errors
///
/// `InvalidArgument` for `n == 0`, `std` not strictly positive, `alpha`
/// outside (0, 1), or a t reference with fewer than 2 observations.
///
/// # Examples
///
/// ```
/// use inferstat::stats::{test_mean, Decision, DispersionSource, TailMode};
///
/// let out = test_mean(17.0, 15.0, 0.5, 10, 0.05, TailMode::Right, DispersionSource::Population)
///     .unwrap();
/// assert!(out.reference.is_normal());
/// assert_eq!(out.decision, Decision::Reject);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn test_mean(
    sample_mean: f64,
    hypothesized_mean: f64,
    std: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
    dispersion: DispersionSource,
) -> StatsResult<TestOutcome> {
    test_mean_with(
        sample_mean,
        hypothesized_mean,
        std,
        n,
        alpha,
        tail,
        dispersion,
        &InferenceOptions::default(),
    )
}

/// [`test_mean`] with explicit options.
#[allow(clippy::too_many_arguments)]
pub fn test_mean_with(
    sample_mean: f64,
    hypothesized_mean: f64,
    std: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
    dispersion: DispersionSource,
    options: &InferenceOptions,
) -> StatsResult<TestOutcome> {
    check_finite("sample_mean", sample_mean)?;
    check_finite("hypothesized_mean", hypothesized_mean)?;
    check_open_unit("alpha", alpha)?;
    let se = standard_error_mean(std, n)?;
    if se == 0.0 {
        return Err(StatsError::invalid_argument(
            "std",
            "standard deviation must be positive for a test statistic",
        ));
    }

    let reference = ReferenceDistribution::select_for_test_with(n, dispersion, options)?;
    let statistic = (sample_mean - hypothesized_mean) / se;
    decide(statistic, reference, tail, alpha)
}

/// Z test of a proportion against a hypothesized value.
///
/// The standard error and the success/failure rule both use the
/// hypothesized proportion, which is the proportion that holds under H₀.
///
/// # Errors
///
/// `Validation` when `n·p₀` or `n·(1-p₀)` is below the minimum expected
/// count; `InvalidArgument` for `n == 0`, proportions outside [0, 1] or
/// `alpha` outside (0, 1).
pub fn test_proportion(
    sample_proportion: f64,
    hypothesized_proportion: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
) -> StatsResult<TestOutcome> {
    test_proportion_with(
        sample_proportion,
        hypothesized_proportion,
        n,
        alpha,
        tail,
        &InferenceOptions::default(),
    )
}

/// [`test_proportion`] with explicit options.
pub fn test_proportion_with(
    sample_proportion: f64,
    hypothesized_proportion: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
    options: &InferenceOptions,
) -> StatsResult<TestOutcome> {
    check_proportion("sample_proportion", sample_proportion)?;
    check_proportion("hypothesized_proportion", hypothesized_proportion)?;
    check_open_unit("alpha", alpha)?;
    check_normal_approximation(
        "proportion test",
        hypothesized_proportion,
        n,
        options.min_expected_count,
    )?;

    let se = standard_error_proportion(hypothesized_proportion, n)?;
    let statistic = (sample_proportion - hypothesized_proportion) / se;
    decide(statistic, ReferenceDistribution::Normal, tail, alpha)
}

fn decide(
    statistic: f64,
    reference: ReferenceDistribution,
    tail: TailMode,
    alpha: f64,
) -> StatsResult<TestOutcome> {
    let pvalue = p_value(statistic, reference, tail)?;
    let decision = Decision::from_pvalue(pvalue, alpha);
    log::debug!(
        "{} {}-tailed test: statistic = {}, p = {}, alpha = {} -> {}",
        reference,
        tail,
        statistic,
        pvalue,
        alpha,
        decision
    );
    Ok(TestOutcome {
        statistic,
        pvalue,
        reference,
        tail,
        decision,
    })
}

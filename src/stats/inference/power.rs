//! Type I / Type II error and power of Z tests.
//!
//! The critical region is fixed under H₀ and β is the mass of the sampling
//! distribution under H₁ that lands in the non-rejection region:
//!
//! ```text
//! two-sided:  [θ₀ - z_{α/2}·SE₀, θ₀ + z_{α/2}·SE₀]   β = F₁(high) - F₁(low)
//! right:      (-∞, θ₀ + z_α·SE₀]                      β = F₁(high)
//! left:       [θ₀ - z_α·SE₀, +∞)                      β = 1 - F₁(low)
//! power = 1 - β
//! ```
//!
//! For a mean SE₀ = SE₁ = σ/√n. For a proportion the two differ and both are
//! computed: SE₀ from p₀ places the boundaries, SE₁ from p₁ measures β.

use super::standard_error::{
    check_finite, check_normal_approximation, check_open_unit, check_proportion,
    standard_error_mean, standard_error_proportion,
};
use super::types::{CriticalRegion, InferenceOptions, PowerAnalysis, TailMode};
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::Normal;

/// Error rates and power of a Z test for a mean with known dispersion.
///
/// # Errors
///
/// `InvalidArgument` for `n == 0`, `std` not strictly positive, non-finite
/// means or `alpha` outside (0, 1).
///
/// # Examples
///
/// ```
/// use inferstat::stats::{error_power_mean, TailMode};
///
/// // Medication lowers blood pressure by 12 mmHg instead of the 10 under H₀
/// let pa = error_power_mean(10.0, 12.0, 1.5, 25, 0.05, TailMode::Right).unwrap();
/// assert!(pa.power > 0.999);
/// ```
pub fn error_power_mean(
    mean_null: f64,
    mean_alt: f64,
    std: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
) -> StatsResult<PowerAnalysis> {
    check_finite("mean_null", mean_null)?;
    check_finite("mean_alt", mean_alt)?;
    check_open_unit("alpha", alpha)?;
    let se = standard_error_mean(std, n)?;
    if se == 0.0 {
        return Err(StatsError::invalid_argument(
            "std",
            "standard deviation must be positive for power analysis",
        ));
    }

    let region = critical_region(mean_null, se, alpha, tail)?;
    let alternative = Normal::new(mean_alt, se)?;
    Ok(analyze(alpha, region, &alternative, tail))
}

/// Error rates and power of a Z test for a proportion.
///
/// # Errors
///
/// `Validation` when `p_null` fails the success/failure rule;
/// `InvalidArgument` for `n == 0`, `alpha` outside (0, 1), `p_null` outside
/// [0, 1] or `p_alt` not strictly inside (0, 1).
pub fn error_power_proportion(
    p_null: f64,
    p_alt: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
) -> StatsResult<PowerAnalysis> {
    error_power_proportion_with(p_null, p_alt, n, alpha, tail, &InferenceOptions::default())
}

/// [`error_power_proportion`] with explicit options.
pub fn error_power_proportion_with(
    p_null: f64,
    p_alt: f64,
    n: usize,
    alpha: f64,
    tail: TailMode,
    options: &InferenceOptions,
) -> StatsResult<PowerAnalysis> {
    check_proportion("p_null", p_null)?;
    check_proportion("p_alt", p_alt)?;
    check_open_unit("alpha", alpha)?;
    check_normal_approximation("proportion power analysis", p_null, n, options.min_expected_count)?;
    if p_alt == 0.0 || p_alt == 1.0 {
        return Err(StatsError::invalid_argument(
            "p_alt",
            "alternative proportion must be strictly between 0 and 1",
        ));
    }

    let se_null = standard_error_proportion(p_null, n)?;
    let se_alt = standard_error_proportion(p_alt, n)?;

    let region = critical_region(p_null, se_null, alpha, tail)?;
    let alternative = Normal::new(p_alt, se_alt)?;
    Ok(analyze(alpha, region, &alternative, tail))
}

/// Non-rejection region around `center` at significance `alpha`.
fn critical_region(
    center: f64,
    se: f64,
    alpha: f64,
    tail: TailMode,
) -> StatsResult<CriticalRegion> {
    let z = Normal::standard();
    let region = match tail {
        TailMode::TwoSided => {
            let z_crit = z.isf(alpha / 2.0)?;
            CriticalRegion {
                lower: center - z_crit * se,
                upper: center + z_crit * se,
            }
        }
        TailMode::Right => CriticalRegion {
            lower: f64::NEG_INFINITY,
            upper: center + z.isf(alpha)? * se,
        },
        TailMode::Left => CriticalRegion {
            lower: center + z.ppf(alpha)? * se,
            upper: f64::INFINITY,
        },
    };
    Ok(region)
}

fn analyze(
    alpha: f64,
    region: CriticalRegion,
    alternative: &Normal,
    tail: TailMode,
) -> PowerAnalysis {
    let beta = match tail {
        TailMode::TwoSided => alternative.prob_between(region.lower, region.upper),
        TailMode::Right => alternative.cdf(region.upper),
        TailMode::Left => alternative.sf(region.lower),
    }
    .clamp(0.0, 1.0);

    let analysis = PowerAnalysis {
        type_i_error: alpha,
        type_ii_error: beta,
        power: 1.0 - beta,
        critical_region: region,
    };
    log::debug!(
        "{}-tailed power analysis: alpha = {}, beta = {}, power = {}",
        tail,
        analysis.type_i_error,
        analysis.type_ii_error,
        analysis.power
    );
    analysis
}

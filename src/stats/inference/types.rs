//! Types for the inference toolkit.

use std::fmt;
use std::str::FromStr;

use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::{Normal, StudentT};

/// Tunables shared by estimation, testing and power analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InferenceOptions {
    /// Sample size from which a sample counts as large (default: 30)
    pub large_sample_threshold: usize,
    /// Minimum expected successes and failures for the normal
    /// approximation of a proportion (default: 10)
    pub min_expected_count: f64,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            large_sample_threshold: 30,
            min_expected_count: 10.0,
        }
    }
}

/// Where a standard deviation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispersionSource {
    /// Known population standard deviation.
    Population,
    /// Standard deviation estimated from the sample.
    Sample,
}

impl DispersionSource {
    /// Maps the common `is_population_std` flag onto a source.
    pub fn from_population_flag(is_population_std: bool) -> Self {
        if is_population_std {
            Self::Population
        } else {
            Self::Sample
        }
    }

    pub fn is_population(self) -> bool {
        matches!(self, Self::Population)
    }
}

/// Alternative hypothesis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TailMode {
    /// H₁: θ ≠ θ₀
    #[default]
    TwoSided,
    /// H₁: θ < θ₀
    Left,
    /// H₁: θ > θ₀
    Right,
}

impl fmt::Display for TailMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TwoSided => "two",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}

impl FromStr for TailMode {
    type Err = StatsError;

    fn from_str(s: &str) -> StatsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two" | "two-sided" | "two_sided" | "both" => Ok(Self::TwoSided),
            "left" | "less" => Ok(Self::Left),
            "right" | "greater" => Ok(Self::Right),
            other => Err(StatsError::invalid_argument(
                "tail",
                format!("unknown tail mode '{}', expected 'two', 'left' or 'right'", other),
            )),
        }
    }
}

/// Reference distribution of a standardized statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceDistribution {
    /// Standard normal (Z).
    Normal,
    /// Student's t with `df` degrees of freedom.
    StudentT { df: f64 },
}

impl ReferenceDistribution {
    /// Reference distribution for interval estimation of a mean.
    ///
    /// Normal only when the sample is large *and* the population standard
    /// deviation is known; Student-t with `n - 1` degrees of freedom otherwise.
    pub fn select(n: usize, dispersion: DispersionSource) -> StatsResult<Self> {
        Self::select_with(n, dispersion, &InferenceOptions::default())
    }

    /// [`select`](Self::select) with explicit options.
    pub fn select_with(
        n: usize,
        dispersion: DispersionSource,
        options: &InferenceOptions,
    ) -> StatsResult<Self> {
        let large = n >= options.large_sample_threshold;
        let selected = if large && dispersion.is_population() {
            Self::Normal
        } else {
            Self::student_t_for(n)?
        };
        log::debug!(
            "estimation reference for n={} ({:?} std): {}",
            n,
            dispersion,
            selected
        );
        Ok(selected)
    }

    /// Reference distribution for a one-sample test of a mean.
    ///
    /// Normal when the sample is large *or* the population standard deviation
    /// is known; Student-t with `n - 1` degrees of freedom otherwise.
    pub fn select_for_test(n: usize, dispersion: DispersionSource) -> StatsResult<Self> {
        Self::select_for_test_with(n, dispersion, &InferenceOptions::default())
    }

    /// [`select_for_test`](Self::select_for_test) with explicit options.
    pub fn select_for_test_with(
        n: usize,
        dispersion: DispersionSource,
        options: &InferenceOptions,
    ) -> StatsResult<Self> {
        let large = n >= options.large_sample_threshold;
        let selected = if large || dispersion.is_population() {
            Self::Normal
        } else {
            Self::student_t_for(n)?
        };
        log::debug!(
            "test reference for n={} ({:?} std): {}",
            n,
            dispersion,
            selected
        );
        Ok(selected)
    }

    fn student_t_for(n: usize) -> StatsResult<Self> {
        if n < 2 {
            return Err(StatsError::invalid_argument(
                "n",
                format!(
                    "Student-t reference needs at least 2 observations (df = n - 1), got n = {}",
                    n
                ),
            ));
        }
        Ok(Self::StudentT {
            df: (n - 1) as f64,
        })
    }

    /// Degrees of freedom, if this is a t reference.
    pub fn df(&self) -> Option<f64> {
        match self {
            Self::Normal => None,
            Self::StudentT { df } => Some(*df),
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Runs `f` against the concrete standardized distribution.
    fn with_distribution<T>(
        &self,
        f: impl FnOnce(&dyn ContinuousDistribution) -> T,
    ) -> StatsResult<T> {
        match self {
            Self::Normal => Ok(f(&Normal::standard())),
            Self::StudentT { df } => Ok(f(&StudentT::new(*df)?)),
        }
    }

    /// CDF of the standardized reference at `x`.
    pub fn cdf(&self, x: f64) -> StatsResult<f64> {
        self.with_distribution(|d| d.cdf(x))
    }

    /// Survival function of the standardized reference at `x`.
    pub fn sf(&self, x: f64) -> StatsResult<f64> {
        self.with_distribution(|d| d.sf(x))
    }

    /// Critical value leaving `upper_tail` probability to its right.
    pub fn critical_value(&self, upper_tail: f64) -> StatsResult<f64> {
        self.with_distribution(|d| d.isf(upper_tail))?
    }
}

impl fmt::Display for ReferenceDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::StudentT { df } => write!(f, "Student-t(df={})", df),
        }
    }
}

/// Closed interval bounding a probability query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityRange {
    pub start: f64,
    pub end: f64,
}

impl ProbabilityRange {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either bound is NaN or `start > end`.
    pub fn new(start: f64, end: f64) -> StatsResult<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    pub(crate) fn validate(&self) -> StatsResult<()> {
        if self.start.is_nan() || self.end.is_nan() {
            return Err(StatsError::invalid_argument(
                "range",
                "probability range bounds must not be NaN",
            ));
        }
        if self.start > self.end {
            return Err(StatsError::invalid_argument(
                "range",
                format!("start {} is greater than end {}", self.start, self.end),
            ));
        }
        Ok(())
    }
}

/// Two-sided confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Result of confidence-interval estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    /// Point estimate the interval is centred on
    pub point: f64,
    /// Standard error of the point estimate
    pub standard_error: f64,
    /// Distribution the critical value was taken from
    pub reference: ReferenceDistribution,
    /// Critical value at (1 - confidence)/2 upper-tail probability
    pub critical_value: f64,
    /// critical_value × standard_error
    pub margin_of_error: f64,
    pub interval: ConfidenceInterval,
    /// Probability mass inside the requested range, if one was given
    pub probability: Option<f64>,
}

/// Outcome of a significance test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Reject H₀.
    Reject,
    /// Fail to reject H₀.
    FailToReject,
}

impl Decision {
    /// Reject iff `pvalue < alpha`.
    pub fn from_pvalue(pvalue: f64, alpha: f64) -> Self {
        if pvalue < alpha {
            Self::Reject
        } else {
            Self::FailToReject
        }
    }

    pub fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("Reject H₀"),
            Self::FailToReject => f.write_str("Fail to Reject H₀"),
        }
    }
}

/// Result of a one-sample hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestOutcome {
    /// Z or T statistic
    pub statistic: f64,
    pub pvalue: f64,
    pub reference: ReferenceDistribution,
    pub tail: TailMode,
    pub decision: Decision,
}

/// Non-rejection region of a test on the scale of the estimate.
///
/// Estimates outside `[lower, upper]` reject H₀; an unbounded side is ±∞.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalRegion {
    pub lower: f64,
    pub upper: f64,
}

/// Type I / Type II error and power of a test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerAnalysis {
    /// α
    pub type_i_error: f64,
    /// β
    pub type_ii_error: f64,
    /// 1 - β
    pub power: f64,
    pub critical_region: CriticalRegion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_mode_parse() {
        assert_eq!("two".parse::<TailMode>().unwrap(), TailMode::TwoSided);
        assert_eq!(" Left ".parse::<TailMode>().unwrap(), TailMode::Left);
        assert_eq!("right".parse::<TailMode>().unwrap(), TailMode::Right);
        assert_eq!(TailMode::Right.to_string().parse::<TailMode>().unwrap(), TailMode::Right);

        let err = "up".parse::<TailMode>().unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument { arg: "tail", .. }));
    }

    #[test]
    fn test_select_for_estimation() {
        use DispersionSource::*;
        assert_eq!(
            ReferenceDistribution::select(30, Population).unwrap(),
            ReferenceDistribution::Normal
        );
        assert_eq!(
            ReferenceDistribution::select(30, Sample).unwrap(),
            ReferenceDistribution::StudentT { df: 29.0 }
        );
        assert_eq!(
            ReferenceDistribution::select(25, Population).unwrap(),
            ReferenceDistribution::StudentT { df: 24.0 }
        );
        assert!(ReferenceDistribution::select(1, Sample).is_err());
    }

    #[test]
    fn test_select_for_test() {
        use DispersionSource::*;
        assert!(ReferenceDistribution::select_for_test(10, Population).unwrap().is_normal());
        assert!(ReferenceDistribution::select_for_test(30, Sample).unwrap().is_normal());
        assert_eq!(
            ReferenceDistribution::select_for_test(10, Sample).unwrap().df(),
            Some(9.0)
        );
        // Known dispersion never needs degrees of freedom
        assert!(ReferenceDistribution::select_for_test(1, Population).unwrap().is_normal());
    }

    #[test]
    fn test_select_threshold_option() {
        let options = InferenceOptions {
            large_sample_threshold: 20,
            ..Default::default()
        };
        let r =
            ReferenceDistribution::select_with(25, DispersionSource::Population, &options).unwrap();
        assert!(r.is_normal());
    }

    #[test]
    fn test_reference_critical_values() {
        let z = ReferenceDistribution::Normal.critical_value(0.025).unwrap();
        let t = ReferenceDistribution::StudentT { df: 24.0 }.critical_value(0.025).unwrap();
        assert!((z - 1.959963984540054).abs() < 1e-9);
        assert!((t - 2.0638985616).abs() < 1e-6);
        assert!(ReferenceDistribution::StudentT { df: 0.0 }.cdf(1.0).is_err());
        assert!(ReferenceDistribution::Normal.critical_value(1.5).is_err());
    }

    #[test]
    fn test_decision_rule() {
        assert_eq!(Decision::from_pvalue(0.049, 0.05), Decision::Reject);
        assert_eq!(Decision::from_pvalue(0.05, 0.05), Decision::FailToReject);
        assert_eq!(Decision::Reject.to_string(), "Reject H₀");
    }

    #[test]
    fn test_probability_range_validation() {
        assert!(ProbabilityRange::new(2.1, 2.25).is_ok());
        assert!(ProbabilityRange::new(2.25, 2.1).is_err());
        assert!(ProbabilityRange::new(f64::NAN, 1.0).is_err());
        // Infinite bounds express one-sided queries
        assert!(ProbabilityRange::new(f64::NEG_INFINITY, 0.5).is_ok());
    }
}

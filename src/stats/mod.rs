//! Classical statistical inference, descriptive statistics and simple
//! regression.
//!
//! # Inference
//!
//! Confidence intervals, significance tests and Type I/II error analysis
//! work from summary statistics:
//!
//! ```
//! use inferstat::stats::{estimate_mean, test_proportion, DispersionSource, TailMode};
//!
//! // 95% interval for a mean with an estimated standard deviation
//! let est = estimate_mean(100.0, 15.0, 25, 0.95, DispersionSource::Sample, None).unwrap();
//! assert!(est.interval.contains(100.0));
//!
//! // Two-sided Z test of a proportion
//! let out = test_proportion(0.44, 0.5, 1000, 0.05, TailMode::TwoSided).unwrap();
//! assert!(out.decision.is_reject());
//! ```
//!
//! # Distributions
//!
//! ```
//! use inferstat::stats::{ContinuousDistribution, Normal, StudentT};
//!
//! let z = Normal::standard();
//! let t = StudentT::new(24.0).unwrap();
//!
//! // Heavier tails give a wider critical value
//! assert!(t.isf(0.025).unwrap() > z.isf(0.025).unwrap());
//! ```
//!
//! # Descriptive statistics and regression
//!
//! [`describe`] summarizes a sample, [`filter_outliers`] trims it, and
//! [`linregress`] fits an ordinary-least-squares line.

mod continuous;
mod descriptive;
mod distribution;
mod error;
mod inference;
mod regression;

// Public API: Distribution traits and types
pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};

// Public API: Continuous distributions
pub use continuous::{Normal, StudentT};

// Public API: Inference toolkit
pub use inference::{
    ConfidenceInterval, CriticalRegion, Decision, DispersionSource, Estimate, InferenceOptions,
    NormalModel, PowerAnalysis, ProbabilityRange, ReferenceDistribution, TailMode, TestOutcome,
    error_power_mean, error_power_proportion, error_power_proportion_with, estimate_mean,
    estimate_mean_with, estimate_proportion, estimate_proportion_with, p_value,
    standard_error_mean, standard_error_proportion, test_mean, test_mean_with, test_proportion,
    test_proportion_with,
};

// Public API: Descriptive statistics
pub use descriptive::{
    DescriptiveSummary, OutlierRule, ShapeDescription, Skew, Tailedness, describe,
    filter_outliers, percentile, percentile_of_score, rank_dense, rank_ordinal, zscores,
};

// Public API: Regression
pub use regression::{LinregressResult, ResidualDiagnostics, linregress, residual_diagnostics};

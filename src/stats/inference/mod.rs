//! Inference toolkit: standard errors, confidence intervals, significance
//! tests and Type I/II error analysis for a mean or a proportion.
//!
//! Every operation works from summary statistics (`mean`, `std`, `n` or
//! `p`, `n`), is pure, and returns a plain value:
//!
//! | Operation | Result |
//! |---|---|
//! | [`estimate_mean`], [`estimate_proportion`] | [`Estimate`] |
//! | [`test_mean`], [`test_proportion`] | [`TestOutcome`] |
//! | [`error_power_mean`], [`error_power_proportion`] | [`PowerAnalysis`] |
//!
//! Each has a `*_with` variant taking [`InferenceOptions`].
//!
//! # Reference distribution
//!
//! Estimation uses the normal distribution only for a large sample with a
//! known population standard deviation. Testing uses it for a large sample
//! or a known population standard deviation. Student-t with `n - 1` degrees
//! of freedom covers the rest. Proportions always use the normal
//! approximation and require `n·p ≥ 10` and `n·(1-p) ≥ 10`.

mod estimation;
mod normal_model;
mod power;
mod standard_error;
mod testing;
mod types;

#[cfg(test)]
mod tests;

pub use estimation::{
    estimate_mean, estimate_mean_with, estimate_proportion, estimate_proportion_with,
};
pub use normal_model::NormalModel;
pub use power::{error_power_mean, error_power_proportion, error_power_proportion_with};
pub use standard_error::{standard_error_mean, standard_error_proportion};
pub use testing::{p_value, test_mean, test_mean_with, test_proportion, test_proportion_with};
pub use types::{
    ConfidenceInterval, CriticalRegion, Decision, DispersionSource, Estimate, InferenceOptions,
    PowerAnalysis, ProbabilityRange, ReferenceDistribution, TailMode, TestOutcome,
};

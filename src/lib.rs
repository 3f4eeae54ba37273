//! inferstat - Classical Statistical Inference from Summary Statistics
//!
//! inferstat answers the standard questions of introductory inference for a
//! single mean or a single proportion: how precise is an estimate, is a
//! claimed value plausible, and how likely is a test to miss a real effect.
//! It also carries the descriptive statistics and simple regression that
//! usually come before those questions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              stats::inference                            │
//! │   (estimation, testing, error/power, normal model)      │
//! └──────────────┬───────────────────────────┬──────────────┘
//!                │ uses                      │ uses
//! ┌──────────────▼──────────────┐  ┌─────────▼──────────────┐
//! │     stats::continuous       │  │  stats::descriptive    │
//! │   (Normal, StudentT)        │  │  stats::regression     │
//! └──────────────┬──────────────┘  └────────────────────────┘
//!                │ special functions
//! ┌──────────────▼──────────────┐
//! │           statrs             │
//! └─────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`stats`] - Distributions, inference toolkit, descriptive statistics, regression
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `serde` | `Serialize`/`Deserialize` on options and result types | serde |
//!
//! # Example
//!
//! ```
//! use inferstat::{error_power_mean, test_mean, DispersionSource, TailMode};
//!
//! let out = test_mean(17.0, 15.0, 0.5, 10, 0.05, TailMode::Right, DispersionSource::Population)
//!     .unwrap();
//! assert!(out.decision.is_reject());
//!
//! let pa = error_power_mean(15.0, 15.5, 0.5, 10, 0.05, TailMode::TwoSided).unwrap();
//! assert!((pa.type_ii_error - 0.1146).abs() < 1e-4);
//! ```
//!
//! The crate logs through the `log` facade at debug level and never
//! installs a logger.

pub mod stats;

// Re-export main types for convenience
pub use stats::{
    // Inference results and options
    ConfidenceInterval,
    // Distribution traits
    ContinuousDistribution,
    CriticalRegion,
    Decision,
    // Descriptive statistics
    DescriptiveSummary,
    DispersionSource,
    Distribution,
    Estimate,
    InferenceOptions,
    LinregressResult,
    // Distributions
    Normal,
    NormalModel,
    OutlierRule,
    PowerAnalysis,
    ProbabilityRange,
    ReferenceDistribution,
    ResidualDiagnostics,
    ShapeDescription,
    // Errors
    StatsError,
    StatsResult,
    StudentT,
    TailMode,
    TestOutcome,
    // Operations
    describe,
    error_power_mean,
    error_power_proportion,
    estimate_mean,
    estimate_proportion,
    filter_outliers,
    linregress,
    residual_diagnostics,
    test_mean,
    test_proportion,
};

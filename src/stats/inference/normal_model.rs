//! Probability queries against a normal model of a population.

use crate::stats::descriptive::mean_std;
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::StatsResult;
use crate::stats::Normal;

/// Normal model N(mean, std) answering interval and percentile queries.
///
/// # Examples
///
/// ```
/// use inferstat::stats::NormalModel;
///
/// let speed = [99.0, 86.0, 87.0, 88.0, 111.0, 86.0, 103.0, 87.0, 94.0, 78.0, 77.0, 85.0, 86.0];
/// let model = NormalModel::fit(&speed).unwrap();
/// assert!((model.prob_between(86.0, 99.0) - 0.50).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalModel {
    dist: Normal,
}

impl NormalModel {
    /// # Errors
    ///
    /// `InvalidParameter` if `std` is not positive and finite or `mean` is
    /// not finite.
    pub fn new(mean: f64, std: f64) -> StatsResult<Self> {
        Ok(Self {
            dist: Normal::new(mean, std)?,
        })
    }

    /// Fit to data using the population standard deviation.
    ///
    /// # Errors
    ///
    /// `EmptyData` for empty input, `InvalidArgument` for NaN input and
    /// `InvalidParameter` for constant data.
    pub fn fit(data: &[f64]) -> StatsResult<Self> {
        let (mean, std) = mean_std(data, "NormalModel::fit")?;
        Self::new(mean, std)
    }

    /// P(a ≤ X ≤ b); zero when `b < a`.
    pub fn prob_between(&self, a: f64, b: f64) -> f64 {
        if b < a {
            return 0.0;
        }
        self.dist.prob_between(a, b)
    }

    /// P(X < a)
    pub fn prob_below(&self, a: f64) -> f64 {
        self.dist.cdf(a)
    }

    /// P(X > b)
    pub fn prob_above(&self, b: f64) -> f64 {
        self.dist.sf(b)
    }

    /// Value below which a fraction `q` of the mass lies.
    ///
    /// # Errors
    ///
    /// `InvalidProbability` if `q` is outside [0, 1].
    pub fn percentile_point(&self, q: f64) -> StatsResult<f64> {
        self.dist.ppf(q)
    }

    pub fn mean(&self) -> f64 {
        self.dist.mu()
    }

    pub fn std(&self) -> f64 {
        self.dist.sigma()
    }

    pub fn distribution(&self) -> &Normal {
        &self.dist
    }
}

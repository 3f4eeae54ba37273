//! Distribution traits shared by the reference distributions.

use crate::stats::error::{StatsError, StatsResult};

/// Moments and location summaries of a probability distribution.
pub trait Distribution {
    /// Mean of the distribution (NaN where undefined).
    fn mean(&self) -> f64;

    /// Variance of the distribution (NaN or infinity where undefined).
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Median of the distribution.
    fn median(&self) -> f64;

    /// Mode of the distribution.
    fn mode(&self) -> f64;
}

/// A continuous distribution over the real line.
pub trait ContinuousDistribution: Distribution {
    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the density at `x`.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    ///
    /// Implementors should override this when `1 - cdf(x)` loses precision in
    /// the upper tail.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Quantile function (inverse CDF).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidProbability`] if `p` is outside [0, 1].
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Inverse survival function: the `x` with `sf(x) = q`.
    fn isf(&self, q: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(StatsError::InvalidProbability { value: q });
        }
        self.ppf(1.0 - q)
    }

    /// Probability mass between `a` and `b` (`cdf(b) - cdf(a)`).
    fn prob_between(&self, a: f64, b: f64) -> f64 {
        self.cdf(b) - self.cdf(a)
    }

    /// Central interval containing `confidence` of the probability mass.
    ///
    /// Returns `(lower, upper)` with `(1 - confidence)/2` mass in each tail.
    fn interval(&self, confidence: f64) -> StatsResult<(f64, f64)> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(StatsError::InvalidProbability { value: confidence });
        }
        let tail = (1.0 - confidence) / 2.0;
        Ok((self.ppf(tail)?, self.ppf(1.0 - tail)?))
    }
}

//! Simple linear regression.
//!
//! Fits the model y = β₀ + β₁x + ε using **Ordinary Least Squares (OLS)**.
//!
//! ## Formulas
//!
//! ```text
//! β₁ = SS_xy / SS_xx
//! β₀ = ȳ - β₁x̄
//! r  = SS_xy / √(SS_xx · SS_yy)
//! ```
//!
//! where SS_xx = Σ(xᵢ - x̄)², SS_yy = Σ(yᵢ - ȳ)² and SS_xy = Σ(xᵢ - x̄)(yᵢ - ȳ).
//!
//! ## Standard Errors
//!
//! ```text
//! s²     = SS_res / (n - 2)
//! SE(β₁) = √(s² / SS_xx)
//! SE(β₀) = SE(β₁) × √(1/n + x̄²/SS_xx)
//! ```
//!
//! The p-value tests H₀: β₁ = 0 with t = β₁ / SE(β₁), two-sided, against
//! Student's t with n - 2 degrees of freedom.

use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::StudentT;

/// Result of simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinregressResult {
    /// Slope of the regression line
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub rvalue: f64,
    /// Two-sided p-value for hypothesis test (slope = 0)
    pub pvalue: f64,
    /// Standard error of the slope estimate
    pub stderr: f64,
    /// Standard error of the intercept estimate
    pub intercept_stderr: f64,
}

impl LinregressResult {
    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.rvalue * self.rvalue
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit quality of a regression line on the data it was fitted to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidualDiagnostics {
    /// ŷᵢ for each xᵢ
    pub predictions: Vec<f64>,
    /// yᵢ - ŷᵢ
    pub residuals: Vec<f64>,
    pub r_squared: f64,
    /// Mean of squared residuals over n
    pub mse: f64,
    pub rmse: f64,
}

/// Least-squares line through `(x, y)`.
///
/// # Errors
///
/// `LengthMismatch` if the slices differ in length, `InsufficientData` for
/// fewer than 3 points, `NumericalError` if `x` is constant and
/// `InvalidArgument` for non-finite input.
///
/// # Examples
///
/// ```
/// use inferstat::stats::linregress;
///
/// let fit = linregress(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 3.0, 5.0, 7.0, 11.0]).unwrap();
/// assert!((fit.slope - 2.2).abs() < 1e-12);
/// assert!((fit.intercept + 1.0).abs() < 1e-12);
/// ```
pub fn linregress(x: &[f64], y: &[f64]) -> StatsResult<LinregressResult> {
    check_pairs(x, y, "linregress")?;
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(StatsError::invalid_argument(
            "x/y",
            "regression requires finite samples",
        ));
    }

    let n = x.len();
    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let (ss_xx, ss_yy, ss_xy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(xx, yy, xy), (xi, yi)| {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        (xx + dx * dx, yy + dy * dy, xy + dx * dy)
    });

    if ss_xx == 0.0 {
        return Err(StatsError::NumericalError {
            message: "x has zero variance".to_string(),
        });
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    // A flat response carries no linear association.
    let r = if ss_yy > 0.0 {
        (ss_xy / (ss_xx * ss_yy).sqrt()).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let df = n_f - 2.0;
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| {
            let e = yi - (slope * xi + intercept);
            e * e
        })
        .sum();

    let std_err = (ss_res / df / ss_xx).sqrt();
    let intercept_stderr = std_err * (1.0 / n_f + mean_x * mean_x / ss_xx).sqrt();

    let pvalue = if std_err == 0.0 {
        // Exact fit: significant only when the line actually slopes
        if slope == 0.0 { 1.0 } else { 0.0 }
    } else {
        let t_stat = slope / std_err;
        let t_dist = StudentT::new(df)?;
        (2.0 * t_dist.sf(t_stat.abs())).min(1.0)
    };

    log::debug!(
        "linregress n = {}: slope = {}, intercept = {}, r = {}, p = {}",
        n,
        slope,
        intercept,
        r,
        pvalue
    );

    Ok(LinregressResult {
        slope,
        intercept,
        rvalue: r,
        pvalue,
        stderr: std_err,
        intercept_stderr,
    })
}

/// Predictions, residuals and error measures of `fit` on `(x, y)`.
///
/// # Errors
///
/// `LengthMismatch` if the slices differ in length and `EmptyData` if they
/// are empty.
pub fn residual_diagnostics(
    x: &[f64],
    y: &[f64],
    fit: &LinregressResult,
) -> StatsResult<ResidualDiagnostics> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "residual_diagnostics".to_string(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyData {
            context: "residual_diagnostics".to_string(),
        });
    }

    let predictions: Vec<f64> = x.iter().map(|&xi| fit.predict(xi)).collect();
    let residuals: Vec<f64> = y.iter().zip(&predictions).map(|(yi, p)| yi - p).collect();
    let mse = residuals.iter().map(|e| e * e).sum::<f64>() / residuals.len() as f64;

    Ok(ResidualDiagnostics {
        predictions,
        residuals,
        r_squared: fit.r_squared(),
        mse,
        rmse: mse.sqrt(),
    })
}

fn check_pairs(x: &[f64], y: &[f64], context: &str) -> StatsResult<()> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: context.to_string(),
        });
    }
    if x.len() < 3 {
        return Err(StatsError::InsufficientData {
            required: 3,
            got: x.len(),
            context: context.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    const Y: [f64; 5] = [2.0, 3.0, 5.0, 7.0, 11.0];

    #[test]
    fn test_linregress() {
        let fit = linregress(&X, &Y).unwrap();
        assert!((fit.slope - 2.2).abs() < 1e-12);
        assert!((fit.intercept - (-1.0)).abs() < 1e-12);
        assert!((fit.rvalue - 0.9722718241315028).abs() < 1e-12);
        assert!((fit.r_squared() - 0.9453125).abs() < 1e-12);
        assert!((fit.stderr - 0.30550504633038933).abs() < 1e-12);
        assert!((fit.intercept_stderr - 1.0132456102380443).abs() < 1e-12);
        assert!((fit.pvalue - 0.005519518537275725).abs() < 1e-8);
    }

    #[test]
    fn test_residual_diagnostics() {
        let fit = linregress(&X, &Y).unwrap();
        let diag = residual_diagnostics(&X, &Y, &fit).unwrap();
        assert_eq!(diag.predictions.len(), 5);
        assert!((diag.predictions[0] - 1.2).abs() < 1e-12);
        assert!((diag.residuals[0] - 0.8).abs() < 1e-12);
        assert!(diag.residuals.iter().sum::<f64>().abs() < 1e-10);
        assert!((diag.mse - 0.56).abs() < 1e-12);
        assert!((diag.rmse - 0.7483314773547882).abs() < 1e-12);
        assert!((diag.r_squared - 0.9453125).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_fit() {
        let fit = linregress(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.rvalue - 1.0).abs() < 1e-12);
        assert_eq!(fit.pvalue, 0.0);
    }

    #[test]
    fn test_constant_response() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [5.0, 5.0, 5.0, 5.0];
        let fit = linregress(&x, &y).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
        assert_eq!(fit.rvalue, 0.0);
        assert_eq!(fit.pvalue, 1.0);

        let diag = residual_diagnostics(&x, &y, &fit).unwrap();
        assert_eq!(diag.r_squared, 0.0);
        assert_eq!(diag.mse, 0.0);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            linregress(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { .. })
        ));
        assert!(matches!(
            linregress(&[1.0, 2.0], &[1.0, 2.0]),
            Err(StatsError::InsufficientData { required: 3, .. })
        ));
        assert!(matches!(
            linregress(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(StatsError::NumericalError { .. })
        ));
        let fit = linregress(&X, &Y).unwrap();
        assert!(residual_diagnostics(&X, &Y[..4], &fit).is_err());
    }
}

//! Continuous reference distributions.

mod normal;
mod student_t;

pub use normal::Normal;
pub use student_t::StudentT;

/// Special functions used by the distributions.
pub(crate) mod special {
    use statrs::function::{beta, erf, gamma};

    /// Standard normal PDF constant: 1/sqrt(2π)
    pub const INV_SQRT_2PI: f64 = 0.3989422804014327;

    /// ln(sqrt(2π))
    pub const LN_SQRT_2PI: f64 = 0.9189385332046727;

    /// Complementary error function: erfc(x) = 1 - erf(x)
    pub fn erfc(x: f64) -> f64 {
        erf::erfc(x)
    }

    /// Inverse complementary error function.
    pub fn erfcinv(x: f64) -> f64 {
        erf::erfc_inv(x)
    }

    /// Standard normal CDF: Φ(x)
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal quantile function: Φ⁻¹(p)
    ///
    /// Evaluated through erfc⁻¹ of the smaller tail so that quantiles of
    /// tiny probabilities in either tail stay accurate.
    pub fn norm_ppf(p: f64) -> f64 {
        if p < 0.5 {
            -std::f64::consts::SQRT_2 * erfcinv(2.0 * p)
        } else {
            std::f64::consts::SQRT_2 * erfcinv(2.0 * (1.0 - p))
        }
    }

    /// Log-gamma function.
    pub fn lgamma(x: f64) -> f64 {
        gamma::ln_gamma(x)
    }

    /// Regularized incomplete beta function: I_x(a, b).
    ///
    /// NaN outside the domain `a > 0, b > 0, 0 <= x <= 1`.
    pub fn betainc(a: f64, b: f64, x: f64) -> f64 {
        beta::checked_beta_reg(a, b, x).unwrap_or(f64::NAN)
    }

    /// Inverse regularized incomplete beta function.
    pub fn betaincinv(a: f64, b: f64, p: f64) -> f64 {
        beta::inv_beta_reg(a, b, p)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_norm_cdf_ppf_roundtrip() {
            for p in [0.001, 0.025, 0.3, 0.5, 0.84, 0.975] {
                assert!((norm_cdf(norm_ppf(p)) - p).abs() < 1e-12);
            }
        }

        #[test]
        fn test_norm_ppf_far_tails() {
            for q in [1e-8, 1e-12, 1e-15] {
                let x = norm_ppf(q);
                assert!((norm_cdf(x) / q - 1.0).abs() < 1e-9, "q = {}", q);
            }
            for p in [0.001, 0.2, 0.45] {
                assert!((norm_ppf(1.0 - p) + norm_ppf(p)).abs() < 1e-12);
            }
        }

        #[test]
        fn test_betainc_out_of_domain_is_nan() {
            assert!(betainc(1.0, 0.5, 1.5).is_nan());
            assert!(betainc(-1.0, 0.5, 0.5).is_nan());
            assert!((betainc(1.0, 1.0, 0.25) - 0.25).abs() < 1e-12);
        }
    }
}

//! Descriptive statistics over a slice of observations.
//!
//! Moments are population moments (ddof = 0). Percentiles use linear
//! interpolation between order statistics:
//!
//! ```text
//! h = (n - 1) · q / 100
//! P(q) = x₍⌊h⌋₎ + (h - ⌊h⌋) · (x₍⌊h⌋+1₎ - x₍⌊h⌋₎)
//! ```
//!
//! Skewness and kurtosis are the biased Fisher estimators, kurtosis being
//! excess kurtosis (0 for a normal distribution).

use std::cmp::Ordering;
use std::fmt;

use crate::stats::error::{StatsError, StatsResult};

/// Summary of a sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptiveSummary {
    /// Number of observations
    pub nobs: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value, the smallest one on ties
    pub mode: f64,
    pub min: f64,
    pub max: f64,
    /// max - min
    pub range: f64,
    /// (min + max) / 2
    pub mid_range: f64,
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
    pub iqr: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std: f64,
    /// Mean absolute deviation around the mean
    pub mad_mean: f64,
    /// Median absolute deviation around the median
    pub mad_median: f64,
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
}

/// Summarize `data`.
///
/// # Errors
///
/// `EmptyData` if `data` is empty; `InvalidArgument` if it contains NaN.
///
/// # Examples
///
/// ```
/// use inferstat::stats::describe;
///
/// let speed = [99.0, 86.0, 87.0, 88.0, 111.0, 86.0, 103.0, 87.0, 94.0, 78.0, 77.0, 85.0, 86.0];
/// let s = describe(&speed).unwrap();
/// assert_eq!(s.median, 87.0);
/// assert_eq!(s.mode, 86.0);
/// assert_eq!(s.iqr, 8.0);
/// ```
pub fn describe(data: &[f64]) -> StatsResult<DescriptiveSummary> {
    let sorted = sorted_copy(data, "describe")?;
    let n = sorted.len();
    let n_f = n as f64;

    let mean = sorted.iter().sum::<f64>() / n_f;
    let (m2, m3, m4) = sorted.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    });
    let variance = m2 / n_f;

    let (skewness, kurtosis) = if variance > 0.0 {
        (
            (m3 / n_f) / variance.powf(1.5),
            (m4 / n_f) / (variance * variance) - 3.0,
        )
    } else {
        (0.0, 0.0)
    };

    let median = percentile_sorted(&sorted, 50.0);
    let q1 = percentile_sorted(&sorted, 25.0);
    let q3 = percentile_sorted(&sorted, 75.0);
    let min = sorted[0];
    let max = sorted[n - 1];

    let mad_mean = sorted.iter().map(|x| (x - mean).abs()).sum::<f64>() / n_f;
    let mad_median = median_abs_deviation_sorted(&sorted, median);

    Ok(DescriptiveSummary {
        nobs: n,
        mean,
        median,
        mode: mode_sorted(&sorted),
        min,
        max,
        range: max - min,
        mid_range: (min + max) / 2.0,
        q1,
        q3,
        iqr: q3 - q1,
        variance,
        std: variance.sqrt(),
        mad_mean,
        mad_median,
        skewness,
        kurtosis,
    })
}

/// Percentile of `data` with linear interpolation, `q` in [0, 100].
///
/// # Errors
///
/// `EmptyData` if `data` is empty; `InvalidArgument` if `q` is outside
/// [0, 100] or `data` contains NaN.
pub fn percentile(data: &[f64], q: f64) -> StatsResult<f64> {
    if !(0.0..=100.0).contains(&q) {
        return Err(StatsError::invalid_argument(
            "q",
            format!("percentile must be in [0, 100], got {}", q),
        ));
    }
    let sorted = sorted_copy(data, "percentile")?;
    Ok(percentile_sorted(&sorted, q))
}

/// Standard scores using the population standard deviation.
///
/// Constant data has no spread and maps to all zeros.
///
/// # Errors
///
/// `EmptyData` if `data` is empty; `InvalidArgument` if it contains NaN.
pub fn zscores(data: &[f64]) -> StatsResult<Vec<f64>> {
    let (mean, std) = mean_std(data, "zscores")?;
    if std == 0.0 {
        return Ok(vec![0.0; data.len()]);
    }
    Ok(data.iter().map(|x| (x - mean) / std).collect())
}

/// Percentile rank of `score` relative to `data`, in [0, 100].
///
/// Ties are averaged: values strictly below count fully and values equal to
/// `score` count half, with a half-rank correction when `score` is present.
///
/// # Errors
///
/// `EmptyData` if `data` is empty.
pub fn percentile_of_score(data: &[f64], score: f64) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: "percentile_of_score".to_string(),
        });
    }
    let left = data.iter().filter(|&&x| x < score).count();
    let right = data.iter().filter(|&&x| x <= score).count();
    let present = usize::from(right > left);
    Ok((left + right + present) as f64 * 50.0 / data.len() as f64)
}

/// Ranks 1..=n, ties broken by order of appearance.
pub fn rank_ordinal(data: &[f64]) -> StatsResult<Vec<usize>> {
    let order = argsort(data, "rank_ordinal")?;
    let mut ranks = vec![0; data.len()];
    for (rank, &idx) in order.iter().enumerate() {
        ranks[idx] = rank + 1;
    }
    Ok(ranks)
}

/// Ranks with ties sharing a rank and no gaps between ranks.
pub fn rank_dense(data: &[f64]) -> StatsResult<Vec<usize>> {
    let order = argsort(data, "rank_dense")?;
    let mut ranks = vec![0; data.len()];
    let mut rank = 0;
    let mut prev: Option<f64> = None;
    for &idx in &order {
        if prev != Some(data[idx]) {
            rank += 1;
            prev = Some(data[idx]);
        }
        ranks[idx] = rank;
    }
    Ok(ranks)
}

/// Qualitative reading of skewness and excess kurtosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skew {
    Symmetric,
    ModeratelyRight,
    HighlyRight,
    ModeratelyLeft,
    HighlyLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tailedness {
    /// Tails like a normal distribution
    Mesokurtic,
    /// Heavy tails
    Leptokurtic,
    /// Light tails
    Platykurtic,
}

/// Shape classification from moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeDescription {
    pub skew: Skew,
    pub tailedness: Tailedness,
}

impl ShapeDescription {
    /// Classify a skewness and an excess kurtosis.
    ///
    /// |skewness| ≥ 1 is highly skewed, anything else non-zero moderately.
    pub fn from_moments(skewness: f64, excess_kurtosis: f64) -> Self {
        let skew = if skewness == 0.0 {
            Skew::Symmetric
        } else if skewness >= 1.0 {
            Skew::HighlyRight
        } else if skewness > 0.0 {
            Skew::ModeratelyRight
        } else if skewness > -1.0 {
            Skew::ModeratelyLeft
        } else {
            Skew::HighlyLeft
        };

        let tailedness = match excess_kurtosis.partial_cmp(&0.0) {
            Some(Ordering::Greater) => Tailedness::Leptokurtic,
            Some(Ordering::Less) => Tailedness::Platykurtic,
            _ => Tailedness::Mesokurtic,
        };

        Self { skew, tailedness }
    }

    pub fn of(summary: &DescriptiveSummary) -> Self {
        Self::from_moments(summary.skewness, summary.kurtosis)
    }
}

impl fmt::Display for Skew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Skew::Symmetric => "symmetric",
            Skew::ModeratelyRight => "moderately right-skewed",
            Skew::HighlyRight => "highly right-skewed",
            Skew::ModeratelyLeft => "moderately left-skewed",
            Skew::HighlyLeft => "highly left-skewed",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Tailedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tailedness::Mesokurtic => "mesokurtic",
            Tailedness::Leptokurtic => "leptokurtic",
            Tailedness::Platykurtic => "platykurtic",
        };
        f.write_str(s)
    }
}

/// Rule deciding which observations count as outliers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutlierRule {
    /// Keep `[q1 - factor·IQR, q3 + factor·IQR]`.
    Iqr { factor: f64 },
    /// Keep `|z| ≤ threshold`.
    ZScore { threshold: f64 },
    /// Keep `|0.6745·(x - median)/MAD| ≤ threshold`.
    ModifiedZScore { threshold: f64 },
}

impl OutlierRule {
    pub fn iqr() -> Self {
        Self::Iqr { factor: 1.5 }
    }

    pub fn zscore() -> Self {
        Self::ZScore { threshold: 3.0 }
    }

    pub fn modified_zscore() -> Self {
        Self::ModifiedZScore { threshold: 3.5 }
    }
}

/// Consistency constant relating the MAD to σ for normal data.
const MODIFIED_Z_SCALE: f64 = 0.6745;

/// Values of `data` that are not outliers under `rule`, in original order.
///
/// # Errors
///
/// `EmptyData` if `data` is empty; `InvalidArgument` for NaN data or a
/// negative/NaN factor or threshold.
pub fn filter_outliers(data: &[f64], rule: OutlierRule) -> StatsResult<Vec<f64>> {
    let sorted = sorted_copy(data, "filter_outliers")?;

    let kept: Vec<f64> = match rule {
        OutlierRule::Iqr { factor } => {
            check_cutoff("factor", factor)?;
            let q1 = percentile_sorted(&sorted, 25.0);
            let q3 = percentile_sorted(&sorted, 75.0);
            let iqr = q3 - q1;
            let (lo, hi) = (q1 - factor * iqr, q3 + factor * iqr);
            data.iter().copied().filter(|x| lo <= *x && *x <= hi).collect()
        }
        OutlierRule::ZScore { threshold } => {
            check_cutoff("threshold", threshold)?;
            let z = zscores(data)?;
            data.iter()
                .zip(&z)
                .filter(|(_, z)| z.abs() <= threshold)
                .map(|(x, _)| *x)
                .collect()
        }
        OutlierRule::ModifiedZScore { threshold } => {
            check_cutoff("threshold", threshold)?;
            let median = percentile_sorted(&sorted, 50.0);
            let mad = median_abs_deviation_sorted(&sorted, median);
            if mad == 0.0 {
                data.iter().copied().filter(|x| *x == median).collect()
            } else {
                data.iter()
                    .copied()
                    .filter(|x| (MODIFIED_Z_SCALE * (x - median) / mad).abs() <= threshold)
                    .collect()
            }
        }
    };

    log::debug!(
        "{:?}: kept {} of {} observations",
        rule,
        kept.len(),
        data.len()
    );
    Ok(kept)
}

/// Population mean and standard deviation.
pub(crate) fn mean_std(data: &[f64], context: &str) -> StatsResult<(f64, f64)> {
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: context.to_string(),
        });
    }
    check_no_nan(data)?;
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let var = data.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    Ok((mean, var.sqrt()))
}

fn check_cutoff(arg: &'static str, value: f64) -> StatsResult<()> {
    if value.is_nan() || value < 0.0 {
        return Err(StatsError::invalid_argument(
            arg,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

fn sorted_copy(data: &[f64], context: &str) -> StatsResult<Vec<f64>> {
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: context.to_string(),
        });
    }
    check_no_nan(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn check_no_nan(data: &[f64]) -> StatsResult<()> {
    if data.iter().any(|x| x.is_nan()) {
        return Err(StatsError::invalid_argument("data", "data contains NaN"));
    }
    Ok(())
}

fn argsort(data: &[f64], context: &str) -> StatsResult<Vec<usize>> {
    if data.iter().any(|x| x.is_nan()) {
        return Err(StatsError::invalid_argument("data", format!("{} got NaN", context)));
    }
    let mut order: Vec<usize> = (0..data.len()).collect();
    // Stable sort keeps ties in order of appearance.
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));
    Ok(order)
}

fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q / 100.0;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

fn median_abs_deviation_sorted(sorted: &[f64], median: f64) -> f64 {
    let mut dev: Vec<f64> = sorted.iter().map(|x| (x - median).abs()).collect();
    dev.sort_by(f64::total_cmp);
    percentile_sorted(&dev, 50.0)
}

fn mode_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_count = 0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        // Strictly greater keeps the smallest value on ties.
        if j - i > best_count {
            best = sorted[i];
            best_count = j - i;
        }
        i = j;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: [f64; 13] = [
        99.0, 86.0, 87.0, 88.0, 111.0, 86.0, 103.0, 87.0, 94.0, 78.0, 77.0, 85.0, 86.0,
    ];

    #[test]
    fn test_describe_speed() {
        let s = describe(&SPEED).unwrap();
        assert_eq!(s.nobs, 13);
        assert!((s.mean - 89.76923076923077).abs() < 1e-10);
        assert_eq!(s.median, 87.0);
        assert_eq!(s.mode, 86.0);
        assert_eq!(s.min, 77.0);
        assert_eq!(s.max, 111.0);
        assert_eq!(s.range, 34.0);
        assert_eq!(s.mid_range, 94.0);
        assert_eq!(s.q1, 86.0);
        assert_eq!(s.q3, 94.0);
        assert_eq!(s.iqr, 8.0);
        assert!((s.variance - 85.71597633136093).abs() < 1e-9);
        assert!((s.std - 9.258292301032677).abs() < 1e-10);
        assert!((s.mad_mean - 7.372781065088759).abs() < 1e-10);
        assert_eq!(s.mad_median, 2.0);
        assert!((s.skewness - 0.8451054711831824).abs() < 1e-9);
        assert!((s.kurtosis - 0.01965093187518896).abs() < 1e-9);
    }

    #[test]
    fn test_describe_constant_and_single() {
        let s = describe(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.skewness, 0.0);
        assert_eq!(s.kurtosis, 0.0);

        let s = describe(&[7.0]).unwrap();
        assert_eq!(s.median, 7.0);
        assert_eq!(s.q1, 7.0);

        assert!(matches!(describe(&[]), Err(StatsError::EmptyData { .. })));
        assert!(describe(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_mode_smallest_on_ties() {
        let s = describe(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.mode, 1.0);
    }

    #[test]
    fn test_percentile_interpolation() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&data, 100.0).unwrap(), 4.0);
        assert!((percentile(&data, 50.0).unwrap() - 2.5).abs() < 1e-12);
        assert!((percentile(&data, 25.0).unwrap() - 1.75).abs() < 1e-12);
        assert!(percentile(&data, 101.0).is_err());
    }

    #[test]
    fn test_zscores() {
        let z = zscores(&SPEED).unwrap();
        assert!((z[1] - (-0.40711943916594107)).abs() < 1e-10);
        assert!(z.iter().sum::<f64>().abs() < 1e-10);
        assert_eq!(zscores(&[2.0, 2.0]).unwrap(), vec![0.0, 0.0]);
        assert!(matches!(
            zscores(&[1.0, f64::NAN, 3.0]),
            Err(StatsError::InvalidArgument { arg: "data", .. })
        ));
        assert!(matches!(zscores(&[]), Err(StatsError::EmptyData { .. })));
    }

    #[test]
    fn test_percentile_of_score_and_ranks() {
        let pct = percentile_of_score(&SPEED, 86.0).unwrap();
        assert!((pct - 500.0 / 13.0).abs() < 1e-10);
        assert_eq!(percentile_of_score(&[1.0, 2.0, 3.0, 4.0], 5.0).unwrap(), 100.0);
        assert_eq!(percentile_of_score(&[1.0, 2.0, 3.0, 4.0], 0.0).unwrap(), 0.0);

        // Position 1 holds the first 86
        assert_eq!(rank_ordinal(&SPEED).unwrap()[1], 4);
        assert_eq!(rank_dense(&SPEED).unwrap()[1], 4);

        assert_eq!(rank_ordinal(&[3.0, 1.0, 3.0]).unwrap(), vec![2, 1, 3]);
        assert_eq!(rank_dense(&[3.0, 1.0, 3.0, 5.0]).unwrap(), vec![2, 1, 2, 3]);
    }

    #[test]
    fn test_shape_description() {
        let shape = ShapeDescription::from_moments(0.8451054711831824, 0.01965093187518896);
        assert_eq!(shape.skew, Skew::ModeratelyRight);
        assert_eq!(shape.tailedness, Tailedness::Leptokurtic);

        let shape = ShapeDescription::from_moments(-1.2, -0.5);
        assert_eq!(shape.skew, Skew::HighlyLeft);
        assert_eq!(shape.tailedness, Tailedness::Platykurtic);

        assert_eq!(ShapeDescription::from_moments(0.0, 0.0).skew, Skew::Symmetric);
        assert_eq!(ShapeDescription::from_moments(1.0, 0.0).skew, Skew::HighlyRight);
        assert_eq!(ShapeDescription::from_moments(-0.3, 0.0).skew, Skew::ModeratelyLeft);
    }

    #[test]
    fn test_filter_outliers_speed() {
        let iqr = filter_outliers(&SPEED, OutlierRule::iqr()).unwrap();
        assert_eq!(iqr.len(), 12);
        assert!(!iqr.contains(&111.0));
        assert_eq!(iqr[0], 99.0);

        let z = filter_outliers(&SPEED, OutlierRule::zscore()).unwrap();
        assert_eq!(z.len(), 13);

        let modified = filter_outliers(&SPEED, OutlierRule::modified_zscore()).unwrap();
        assert_eq!(
            modified,
            vec![86.0, 87.0, 88.0, 86.0, 87.0, 94.0, 78.0, 77.0, 85.0, 86.0]
        );
    }

    #[test]
    fn test_filter_outliers_edge_cases() {
        assert!(matches!(
            filter_outliers(&[], OutlierRule::iqr()),
            Err(StatsError::EmptyData { .. })
        ));
        // Zero MAD keeps only the median
        let kept = filter_outliers(&[5.0, 5.0, 5.0, 9.0], OutlierRule::modified_zscore()).unwrap();
        assert_eq!(kept, vec![5.0, 5.0, 5.0]);
        assert!(filter_outliers(&SPEED, OutlierRule::Iqr { factor: -1.0 }).is_err());
    }
}

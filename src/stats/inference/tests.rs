//! Worked scenarios across the inference toolkit.

use super::*;
use crate::stats::StatsError;

#[test]
fn test_iq_interval_small_sample() {
    // IQ sample: mean 100, s = 15, n = 25, 95%
    let est = estimate_mean(100.0, 15.0, 25, 0.95, DispersionSource::Sample, None).unwrap();

    assert_eq!(est.reference, ReferenceDistribution::StudentT { df: 24.0 });
    assert!((est.margin_of_error - 6.1917).abs() < 1e-4);
    assert!((est.interval.lower - 93.8083).abs() < 1e-4);
    assert!((est.interval.upper - 106.1917).abs() < 1e-4);
    assert!(est.interval.contains(100.0));
}

#[test]
fn test_same_inputs_different_rules() {
    // Population std known but n < 30: estimation stays on t, testing moves to Z
    let est = estimate_mean(17.0, 0.5, 10, 0.95, DispersionSource::Population, None).unwrap();
    assert_eq!(est.reference.df(), Some(9.0));

    let out = test_mean(17.0, 15.0, 0.5, 10, 0.05, TailMode::Right, DispersionSource::Population)
        .unwrap();
    assert!(out.reference.is_normal());
}

#[test]
fn test_large_sample_estimated_std() {
    // n ≥ 30 with a sample std: estimation keeps t, testing uses Z
    let est = estimate_mean(350.0, 8.0, 30, 0.95, DispersionSource::Sample, None).unwrap();
    assert_eq!(est.reference.df(), Some(29.0));
    assert!((est.critical_value - 2.045230).abs() < 1e-5);

    let out = test_mean(350.0, 355.0, 8.0, 30, 0.05, TailMode::TwoSided, DispersionSource::Sample)
        .unwrap();
    assert!(out.reference.is_normal());
    assert_eq!(out.decision, Decision::Reject);
}

#[test]
fn test_election_poll() {
    let est = estimate_proportion(0.44, 1000, 0.95, None).unwrap();
    assert!(est.interval.upper < 0.5);

    let out = test_proportion(0.44, 0.5, 1000, 0.05, TailMode::TwoSided).unwrap();
    assert!((out.statistic + 3.79).abs() < 0.01);
    assert!(out.pvalue < 0.001);
    assert_eq!(out.decision, Decision::Reject);
}

#[test]
fn test_interval_and_test_agree() {
    // Two-sided at α ↔ (1 - α) interval for a Z procedure
    let est = estimate_mean(50.0, 10.0, 100, 0.95, DispersionSource::Population, None).unwrap();
    for mu0 in [47.0, 48.5, 50.0, 51.5, 53.0] {
        let out = test_mean(
            50.0,
            mu0,
            10.0,
            100,
            0.05,
            TailMode::TwoSided,
            DispersionSource::Population,
        )
        .unwrap();
        assert_eq!(out.decision.is_reject(), !est.interval.contains(mu0), "mu0 = {}", mu0);
    }
}

#[test]
fn test_rare_event_proportion_rejected_everywhere() {
    let err = estimate_proportion(0.02, 100, 0.95, None).unwrap_err();
    assert!(matches!(err, StatsError::Validation { .. }));

    let err = test_proportion(0.03, 0.02, 100, 0.05, TailMode::Right).unwrap_err();
    assert!(matches!(err, StatsError::Validation { .. }));

    let err = error_power_proportion(0.02, 0.05, 100, 0.05, TailMode::Right).unwrap_err();
    assert!(matches!(err, StatsError::Validation { .. }));
}

#[test]
fn test_power_trade_off() {
    // Tightening alpha lowers power
    let loose = error_power_mean(15.0, 15.5, 0.5, 10, 0.10, TailMode::TwoSided).unwrap();
    let strict = error_power_mean(15.0, 15.5, 0.5, 10, 0.01, TailMode::TwoSided).unwrap();
    assert!(strict.type_ii_error > loose.type_ii_error);
    assert!(strict.power < loose.power);
}

#[test]
fn test_tail_mode_from_text() {
    let tail: TailMode = "right".parse().unwrap();
    let out = test_mean(17.0, 15.0, 0.5, 10, 0.05, tail, DispersionSource::Population).unwrap();
    assert_eq!(out.tail, TailMode::Right);

    assert!(matches!(
        "sideways".parse::<TailMode>(),
        Err(StatsError::InvalidArgument { arg: "tail", .. })
    ));
}

#[test]
fn test_repeated_calls_are_identical() {
    let range = ProbabilityRange::new(2.1, 2.25).unwrap();
    let a = estimate_mean(2.29, 0.20, 12, 0.90, DispersionSource::Sample, Some(range)).unwrap();
    let b = estimate_mean(2.29, 0.20, 12, 0.90, DispersionSource::Sample, Some(range)).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.probability.map(f64::to_bits),
        b.probability.map(f64::to_bits)
    );

    let p = error_power_proportion(0.5, 0.65, 100, 0.05, TailMode::TwoSided).unwrap();
    let q = error_power_proportion(0.5, 0.65, 100, 0.05, TailMode::TwoSided).unwrap();
    assert_eq!(p.power.to_bits(), q.power.to_bits());
}

#[test]
fn test_custom_large_sample_threshold() {
    let options = InferenceOptions {
        large_sample_threshold: 10,
        ..Default::default()
    };
    let est = estimate_mean_with(17.0, 0.5, 10, 0.95, DispersionSource::Population, None, &options)
        .unwrap();
    assert!(est.reference.is_normal());
}

#[test]
fn test_empty_proportion_sample_is_invalid_argument() {
    let err = estimate_proportion(0.5, 0, 0.95, None).unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument { arg: "n", .. }));

    let err = test_proportion(0.5, 0.5, 0, 0.05, TailMode::TwoSided).unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument { arg: "n", .. }));

    let err = error_power_proportion(0.5, 0.6, 0, 0.05, TailMode::Right).unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument { arg: "n", .. }));
}

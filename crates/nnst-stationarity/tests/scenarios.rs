//! Scenario tests on synthetic signals
//!
//! Signals are generated from seeded RNGs so every run sees the same data.

use approx::assert_relative_eq;
use nnst_stationarity::{
    calc, ConfidenceLevel, NnstAnalyzer, NnstParameters, PlotData, SegmentLabel,
    StationarityAnalyzer, Verdict,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Gaussian noise with the given standard deviation
fn gaussian_noise(rng: &mut ChaCha8Rng, n: usize, std_dev: f64) -> Vec<f64> {
    let normal = Normal::new(0.0, std_dev).unwrap();
    (0..n).map(|_| normal.sample(rng)).collect()
}

/// Uniform noise on [0, 1)
fn uniform_noise(rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

/// Quiet half followed by a loud half
fn variance_step(seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut signal = gaussian_noise(&mut rng, 1000, 1.0);
    signal.extend(gaussian_noise(&mut rng, 1000, 10.0));
    signal
}

#[test]
fn constant_signal_is_degenerate_but_answered() {
    let signal = vec![3.0; 2000];
    let result = calc(&signal, &NnstParameters::new(100.0)).unwrap();

    assert!(result.segment_std().iter().all(|&s| s == 0.0));
    assert_eq!(result.std_dev(), 0.0);
    assert_eq!(result.runs().out_of_bounds(), 0);
    assert_eq!(result.runs().in_bounds(), 10);
    assert_eq!(result.run_count(), 0);
    assert_eq!(result.expected_runs(), 1.0);
    assert_eq!(result.run_variance(), 0.0);
    assert_eq!(result.limits(), [100.0, 100.0]);
    assert_eq!(result.index(), 0.0);
    assert_eq!(result.verdict(), Verdict::NonStationary);
}

#[test]
fn variance_step_is_non_stationary() {
    let signal = variance_step(7);
    let params = NnstParameters::new(100.0)
        .with_window_duration(2.0)
        .with_overlap(0.0)
        .with_confidence(ConfidenceLevel::P95);
    let result = calc(&signal, &params).unwrap();

    assert_eq!(result.segment_std().len(), 10);
    assert_eq!(result.verdict(), Verdict::NonStationary);
    assert!(result.index() < 50.0, "index {} should be well below 100", result.index());

    // The quiet half falls below the band, the loud half inside it
    let labels = result.runs().labels();
    assert!(labels[..5].iter().all(|&l| l == SegmentLabel::OutOfBounds));
    assert!(labels[5..].iter().all(|&l| l == SegmentLabel::InBounds));
    assert_eq!(result.run_count(), 1);
    assert_eq!(result.index(), 16.67);
}

#[test]
fn variance_step_is_non_stationary_at_every_confidence() {
    let signal = variance_step(11);
    for confidence in ConfidenceLevel::ALL {
        let params = NnstParameters::new(100.0).with_confidence(confidence);
        let result = calc(&signal, &params).unwrap();
        assert_eq!(result.verdict(), Verdict::NonStationary, "at {confidence}");
    }
}

#[test]
fn white_noise_completes_with_bounded_index() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let signal = uniform_noise(&mut rng, 8000);
    let result = calc(&signal, &NnstParameters::new(400.0)).unwrap();

    assert_eq!(result.sample_count(), 8000);
    assert_eq!(result.segment_std().len(), 10);
    assert!((0.0..=100.0).contains(&result.index()));
    let [lo, hi] = result.limits();
    assert!(lo <= 100.0 && 100.0 <= hi);
}

#[test]
fn white_noise_is_mostly_stationary() {
    let analyzer = NnstAnalyzer::new(NnstParameters::new(400.0)).unwrap();
    let trials = 40;

    let stationary = (0..trials)
        .filter(|&seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let signal = uniform_noise(&mut rng, 8000);
            analyzer.analyze(&signal).unwrap().is_stationary()
        })
        .count();

    assert!(
        stationary >= 24,
        "expected most white-noise realizations to be stationary, got {stationary}/{trials}"
    );
}

#[test]
fn overlap_and_residual_segments() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let signal = gaussian_noise(&mut rng, 2050, 1.0);
    let params = NnstParameters::new(100.0).with_overlap(0.5);
    let result = calc(&signal, &params).unwrap();

    let plan = result.window_plan();
    assert_eq!(plan.window_points(), 200);
    assert_eq!(plan.stride(), 100);
    assert_eq!(plan.segment_count(), 21);
    assert!(plan.has_residual_segment());
    assert_eq!(result.segment_ranges().last().unwrap(), &(2000..2050));
}

#[test]
fn single_usable_segment_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // One full segment and a dropped single-sample residual
    let signal = gaussian_noise(&mut rng, 201, 1.0);
    let err = calc(&signal, &NnstParameters::new(100.0)).unwrap_err();
    assert!(err.is_insufficient_data());

    let signal = gaussian_noise(&mut rng, 200, 1.0);
    let err = calc(&signal, &NnstParameters::new(100.0)).unwrap_err();
    assert!(err.is_insufficient_data());
}

#[test]
fn unsupported_confidence_is_a_configuration_error() {
    let err = ConfidenceLevel::from_percent(80).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn plot_data_matches_result() {
    let signal = variance_step(1);
    let result = calc(&signal, &NnstParameters::new(100.0)).unwrap();
    let plot = PlotData::new(&result, &signal).unwrap();

    assert_eq!(plot.time.len(), signal.len());
    assert_eq!(plot.signal, signal);
    assert_eq!(plot.segment_times.len(), 10);
    assert_eq!(plot.segment_times[0], 0.0);
    assert_relative_eq!(*plot.segment_times.last().unwrap(), 19.99, epsilon = 1e-9);
    assert_relative_eq!(plot.std_line, result.mean() + result.std_dev());
    assert_relative_eq!(plot.upper_line, result.mean() + result.boundaries().upper());
    assert_relative_eq!(plot.lower_line, result.mean() + result.boundaries().lower());
    assert_eq!(plot.title, format!("Index: {}%\nNon-stationary signal", result.index()));

    assert!(PlotData::new(&result, &signal[..100]).is_err());
}

#[test]
fn result_serializes() {
    let signal = variance_step(2);
    let result = calc(&signal, &NnstParameters::new(100.0)).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["calibration"]["verdict"], "NonStationary");
    assert_eq!(json["params"]["confidence"], "P95");

    let back: nnst_stationarity::NnstResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.verdict(), result.verdict());
    assert_eq!(back.run_count(), result.run_count());
    assert_eq!(back.segment_ranges(), result.segment_ranges());
}

//! Non-stationarity index of 20 seconds of uniform white noise
//!
//! Run with `RUST_LOG=nnst_stationarity=debug` to see every stage.

use nnst_stationarity::{
    ConfidenceLevel, NnstAnalyzer, NnstParameters, PlotData, StationarityAnalyzer,
    StationarityAnalyzerProperties,
};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let duration = 20.0;
    let fs = 400.0;
    let mut rng = StdRng::seed_from_u64(2024);
    let signal: Vec<f64> = (0..(duration * fs) as usize).map(|_| rng.gen()).collect();

    let params = NnstParameters::new(fs)
        .with_window_duration(2.0)
        .with_overlap(0.0)
        .with_confidence(ConfidenceLevel::P95);
    let analyzer = NnstAnalyzer::new(params)?;

    println!("=== {} ===", analyzer.method_name());
    println!("Samples: {} (minimum {})", signal.len(), analyzer.minimum_samples());

    let result = analyzer.analyze(&signal)?;
    let [lower, upper] = result.limits();

    println!("Segments: {}", result.segment_std().len());
    println!("Runs: {} observed, {:.2} expected", result.run_count(), result.expected_runs());
    println!("Limits: [{lower}%, {upper}%]");
    println!("Index: {}%", result.index());
    println!("Outcome: {}", result.outcome());
    if let Some(p) = result.calibration().p_value() {
        println!("p-value: {p:.4}");
    }

    let plot = PlotData::new(&result, &signal)?;
    println!("\n{}", plot.title);
    println!("Signal std line:  {:.4}", plot.std_line);
    println!("Boundaries:       [{:.4}, {:.4}]", plot.lower_line, plot.upper_line);
    println!("Segment curve:");
    for (t, y) in plot.segment_times.iter().zip(&plot.segment_curve) {
        println!("  {t:6.2}s  {y:.4}");
    }

    Ok(())
}

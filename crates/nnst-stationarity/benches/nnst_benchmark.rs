use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nnst_stationarity::{
    NnstAnalyzer, NnstParameters, SegmentStatistics, StationarityAnalyzer, WindowPlan,
};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data
fn generate_normal_data(size: usize, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("NnstAnalysis");
    let fs = 400.0;

    for seconds in [20usize, 100, 500] {
        let data = generate_normal_data(seconds * fs as usize, 1.0, 42);

        for overlap in [0.0, 0.5] {
            let params = NnstParameters::new(fs).with_overlap(overlap);
            let analyzer = NnstAnalyzer::new(params).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("overlap_{overlap}"), seconds),
                &data,
                |b, data| b.iter(|| analyzer.analyze(black_box(data)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_segment_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("SegmentStatistics");
    let fs = 400.0;
    let data = generate_normal_data(40_000, 1.0, 7);

    for window in [0.25, 2.0, 10.0] {
        let params = NnstParameters::new(fs).with_window_duration(window);
        let plan = WindowPlan::new(&params, data.len()).unwrap();

        group.bench_with_input(
            BenchmarkId::new("window_seconds", window),
            &data,
            |b, data| b.iter(|| SegmentStatistics::compute(black_box(data), &plan).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_analysis, bench_segment_statistics);
criterion_main!(benches);

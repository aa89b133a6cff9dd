//! Benchmarks for the exploration pipeline stages

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigviz::config::SamplingConfig;
use sigviz::filters::{apply_filter, FilterKind, FilterParams};
use sigviz::pipeline::process;
use sigviz::signal::{generate, SignalParams};
use sigviz::spectrum::analyze;

fn bench_generate(c: &mut Criterion) {
    let config = SamplingConfig::default();
    let params = SignalParams::default();

    c.bench_function("generate_2000_samples", |b| {
        b.iter(|| generate(black_box(&config), black_box(&params)))
    });
}

fn bench_filter(c: &mut Criterion) {
    let config = SamplingConfig::default();
    let (_, samples) = generate(
        &config,
        &SignalParams {
            noise_std: 0.0,
            ..SignalParams::default()
        },
    );

    let mut group = c.benchmark_group("filter");
    for kind in [FilterKind::LowPass, FilterKind::HighPass] {
        let params = FilterParams {
            kind,
            cutoff_hz: 10.0,
        };
        group.bench_function(format!("{:?}_10hz", kind), |b| {
            b.iter(|| apply_filter(black_box(&samples), &config, &params))
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let config = SamplingConfig::default();
    let (_, samples) = generate(&config, &SignalParams::default());

    c.bench_function("analyze_2000_samples", |b| {
        b.iter(|| analyze(black_box(&samples), &config))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let config = SamplingConfig::default();
    let signal_params = SignalParams::default();
    let filter_params = FilterParams::default();

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            process(
                black_box(&config),
                black_box(&signal_params),
                black_box(&filter_params),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_filter,
    bench_analyze,
    bench_full_pipeline
);
criterion_main!(benches);

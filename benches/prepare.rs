//! Run these benches with `cargo bench --bench prepare -- --verbose`
use criterion::{criterion_group, criterion_main, Criterion};

mod utils;

fn build_tester() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(std::time::Duration::from_secs(10))
        .noise_threshold(0.03)
        .significance_level(0.01)
}

criterion_main!(prepare_benches);

criterion_group!(
    name = prepare_benches;
    config = build_tester();
    targets = prepare_bench, analyze_bench
);

fn prepare_bench(c: &mut Criterion) {
    let raw = utils::load_test_file("standard.csv");

    c.bench_function("prepare", |b| {
        b.iter(|| {
            let _x = sounding_prep::prepare(raw.clone()).expect("oops");
        });
    });
}

fn analyze_bench(c: &mut Criterion) {
    let snd = sounding_prep::prepare(utils::load_test_file("standard.csv")).expect("oops");

    c.bench_function("analyze", |b| {
        b.iter(|| {
            let _x = sounding_prep::analyze(snd.clone()).expect("oops");
        });
    });
}

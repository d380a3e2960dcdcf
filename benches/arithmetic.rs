use arithmetic_service::{
    config::AppConfig,
    services::{evaluator, Evaluator, Validator},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_check_access(c: &mut Criterion) {
    let validator = Validator::from_config(&AppConfig::default());
    c.bench_function("check_access", |b| {
        b.iter(|| validator.check_access(black_box(Some("superuser"))))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = Evaluator::new();
    c.bench_function("evaluate_cached", |b| {
        b.iter(|| evaluator.evaluate(black_box("2 2-3-5 1")))
    });

    c.bench_function("compute", |b| {
        b.iter(|| evaluator::compute(black_box("2 2-3-5 1")))
    });
}

criterion_group!(benches, bench_check_access, bench_evaluate);
criterion_main!(benches);

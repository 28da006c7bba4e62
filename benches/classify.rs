//! Classification and rendering benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefixnet_core::{classify_with, ClassifyConfig, OperandWidth};
use prefixnet_render::render_text;

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for bits in [8usize, 64, 256, 1024] {
        let width = OperandWidth::new(bits).unwrap();
        group.bench_with_input(BenchmarkId::new("sequential", bits), &width, |b, &width| {
            let config = ClassifyConfig::new();
            b.iter(|| black_box(classify_with(width, &config)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", bits), &width, |b, &width| {
            let config = ClassifyConfig::new().with_parallel();
            b.iter(|| black_box(classify_with(width, &config)))
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for bits in [8usize, 256] {
        let width = OperandWidth::new(bits).unwrap();
        let network = classify_with(width, &ClassifyConfig::new());
        group.bench_with_input(BenchmarkId::from_parameter(bits), &network, |b, network| {
            b.iter(|| black_box(render_text(network).len()))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_render);
criterion_main!(benches);

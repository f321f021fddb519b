//! Structure compiler benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hl7gen_bench::fixtures;
use hl7gen_codegen::model::StructureModel;
use hl7gen_schema::{NameScope, build_structure, find_group_end};
use std::hint::black_box;

fn benchmark_find_group_end(c: &mut Criterion) {
    let tokens = fixtures::nested(4, 4);

    c.bench_function("find_group_end", |b| {
        b.iter(|| find_group_end(black_box(&tokens), 1, tokens.len()))
    });
}

fn benchmark_build_oru(c: &mut Criterion) {
    let tokens = fixtures::oru_r01();

    c.bench_function("build_oru_r01", |b| {
        b.iter(|| build_structure(black_box(&tokens), Some("ORU_R01")))
    });
}

fn benchmark_build_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_nested");
    for depth in [2, 4, 6] {
        let tokens = fixtures::nested(3, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tokens, |b, tokens| {
            b.iter(|| build_structure(black_box(tokens), None))
        });
    }
    group.finish();
}

fn benchmark_resolve_model(c: &mut Criterion) {
    let tokens = fixtures::nested(3, 4);
    let tree = build_structure(&tokens, Some("SYN")).expect("valid fixture");

    c.bench_function("resolve_model", |b| {
        b.iter(|| StructureModel::from_tree("SYN", black_box(tree.clone())))
    });
}

fn benchmark_name_scope(c: &mut Criterion) {
    c.bench_function("name_scope_repeated", |b| {
        b.iter(|| {
            let mut scope = NameScope::new();
            for _ in 0..32 {
                black_box(scope.resolve("NTE"));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_find_group_end,
    benchmark_build_oru,
    benchmark_build_nested,
    benchmark_resolve_model,
    benchmark_name_scope,
);
criterion_main!(benches);

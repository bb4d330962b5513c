mod support;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glossa_graph::{TermGraph, build_graph_data, sort_terms_by_dependency};
use support::{TIERS, generate_category_for_bench};

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis.tiered");

    for tier in TIERS {
        let terms = generate_category_for_bench(tier, 0x0610_55A0_u64 + tier.term_count as u64);
        group.throughput(Throughput::Elements(terms.len() as u64));

        group.bench_with_input(BenchmarkId::new("graph", tier.name), &terms, |b, terms| {
            b.iter(|| black_box(TermGraph::from_terms(terms)));
        });

        group.bench_with_input(BenchmarkId::new("order", tier.name), &terms, |b, terms| {
            b.iter(|| black_box(sort_terms_by_dependency(terms)));
        });

        group.bench_with_input(BenchmarkId::new("payload", tier.name), &terms, |b, terms| {
            b.iter(|| black_box(build_graph_data(terms)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);

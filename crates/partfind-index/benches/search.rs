use criterion::{criterion_group, criterion_main, Criterion};
use partfind_index::{Query, QueryEngine, SearchIndex};
use std::hint::black_box;

fn synthetic_parts(n: usize) -> Vec<String> {
    const KINDS: [&str; 6] = ["CONNECTOR", "HEADER", "RESISTOR", "CAPACITOR", "RELAY", "FUSE"];
    const FINISH: [&str; 4] = ["ZINC", "TIN", "GOLD", "NICKEL"];

    (0..n)
        .map(|i| {
            format!(
                "{}-PIN {} {} P/N {:06}",
                (i % 40) + 1,
                KINDS[i % KINDS.len()],
                FINISH[(i / 7) % FINISH.len()],
                i
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let parts = synthetic_parts(20_000);
    c.bench_function("build_20k", |b| {
        b.iter(|| SearchIndex::build(black_box(&parts)))
    });
}

fn bench_search(c: &mut Criterion) {
    let index = SearchIndex::build(synthetic_parts(20_000));
    let engine = QueryEngine::new(&index);

    let mut group = c.benchmark_group("search_20k");
    for term in ["connector", "10 pin gold", "relay/fuse", "000123"] {
        let query = Query::new(term);
        group.bench_function(term, |b| b.iter(|| engine.search(black_box(&query))));
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);

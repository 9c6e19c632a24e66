use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hsi_core::rng::RngHandle;
use hsi_graph::gen_regular;

fn build_hypergraph_bench(c: &mut Criterion) {
    c.bench_function("gen_regular_5k", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let outcome = gen_regular(5_000, 4, 3, &mut rng).unwrap();
            black_box(outcome);
        });
    });
}

criterion_group!(benches, build_hypergraph_bench);
criterion_main!(benches);

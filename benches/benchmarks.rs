use criterion::*;


criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = triangulation_benchmark::triangulation_benchmark, quality_benchmark::quality_benchmark
}

criterion_main!(benches);

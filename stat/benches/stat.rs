use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;
use stat::Stat;

fn values() -> Vec<i64> {
    let mut rng = rand::thread_rng();

    (0..1024).map(|_| rng.gen_range(-20..120)).collect()
}

fn predictor_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("stat");

    group.throughput(Throughput::Elements(1));

    let mut stat = Stat::linear(1i64, 80, 10).unwrap();

    group.bench_function("increment (predictor)", |b| b.iter(|| stat.increment(41)));

    let mut stat = Stat::linear(1i64, 80, 10).unwrap();
    let values = values();
    let mut index = 0;

    group.bench_function("increment (predictor, mixed)", |b| {
        b.iter(|| {
            stat.increment(values[index % values.len()]);
            index += 1;
        })
    });
}

fn search_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("stat");

    group.throughput(Throughput::Elements(1));

    let spans = span::linear(1i64, 80, 10).unwrap();
    let mut stat = Stat::new(spans, None).unwrap();

    group.bench_function("increment (search)", |b| b.iter(|| stat.increment(41)));

    let spans = span::linear(1i64, 80, 10).unwrap();
    let mut stat = Stat::new(spans, None).unwrap();
    let values = values();
    let mut index = 0;

    group.bench_function("increment (search, mixed)", |b| {
        b.iter(|| {
            stat.increment(values[index % values.len()]);
            index += 1;
        })
    });
}

criterion_group!(benches, predictor_path, search_path);
criterion_main!(benches);

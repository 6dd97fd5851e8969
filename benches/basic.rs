use cowcell::CowCell;
use criterion::{Criterion, criterion_group, criterion_main};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("repeated_addition/direct_access", |b| {
        let mut counter = 0u32;

        b.iter(|| {
            counter += 1;
        });
    });

    c.bench_function("repeated_addition/unique_access", |b| {
        let mut counter = CowCell::cloning(0u32);

        b.iter(|| {
            *CowCell::make_mut(&mut counter) += 1;
        });
    });

    c.bench_function("repeated_addition/diverging_access", |b| {
        let counter = CowCell::cloning(0u32);

        b.iter(|| {
            let mut fork = counter.clone();
            *CowCell::make_mut(&mut fork) += 1;
        });
    });

    c.bench_function("read_access/shared", |b| {
        let text = CowCell::cloning(String::from("payload"));
        let _snapshot = text.clone();

        b.iter(|| text.len());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use polyeval::{Instance, Method};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for degree in [16usize, 128, 512] {
        // a 12 digit x overflows 64 bit after the second power
        let instance = Instance::generate(degree, 12, &mut StdRng::seed_from_u64(degree as u64));
        let x = instance.x();
        group.throughput(Throughput::Elements(degree as u64));
        for method in Method::ALL {
            group.bench_with_input(
                BenchmarkId::new(method.name(), degree),
                &instance.coeffs,
                |b, coeffs| b.iter(|| method.evaluate(black_box(coeffs), black_box(x))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_methods);
criterion_main!(benches);

use cmplx_lib::math::ComplexValue;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn generate_values(count: usize) -> Vec<ComplexValue> {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    (0..count)
        .filter_map(|_| {
            ComplexValue::new(
                rng.random_range(-1000. ..1000.),
                rng.random_range(-1000. ..1000.),
            )
            .ok()
        })
        .collect()
}

fn magnitude(c: &mut Criterion) {
    let values = generate_values(1024);

    c.bench_function("magnitude", |b| {
        b.iter(|| {
            for value in &values {
                black_box(value.magnitude());
            }
        })
    });
}

fn sort_small(c: &mut Criterion) {
    let values = generate_values(1024);

    c.bench_function("sort by magnitude (small)", |b| {
        b.iter(|| {
            let mut values = values.clone();
            values.sort();
            black_box(values)
        })
    });
}

fn sort_big(c: &mut Criterion) {
    let values = generate_values(16384);

    c.bench_function("sort by magnitude (big)", |b| {
        b.iter(|| {
            let mut values = values.clone();
            values.sort();
            black_box(values)
        })
    });
}

criterion_group!(benches, magnitude, sort_small, sort_big);
criterion_main!(benches);

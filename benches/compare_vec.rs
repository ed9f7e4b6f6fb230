#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use float_vec::{FloatVec, Growth};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("floatvec exact push {} values", count), |b| {
            b.iter(|| {
                let mut buf = FloatVec::new();
                for value in 0..count {
                    buf.push(black_box(value as f32));
                }
            });
        });

        c.bench_function(&format!("floatvec doubling push {} values", count), |b| {
            b.iter(|| {
                let mut buf = FloatVec::new().with_growth(Growth::Doubling);
                for value in 0..count {
                    buf.push(black_box(value as f32));
                }
            });
        });

        c.bench_function(
            &format!("floatvec reserve({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = FloatVec::new();
                    buf.reserve(count);
                    for value in 0..count {
                        buf.push(black_box(value as f32));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<f32>::new();
                for value in 0..count {
                    buf.push(black_box(value as f32));
                }
            });
        });

        c.bench_function(&format!("floatvec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = FloatVec::new().with_growth(Growth::Doubling);
                for value in 0..count {
                    buf.insert(0, black_box(value as f32));
                }
            });
        });

        c.bench_function(&format!("floatvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = FloatVec::new();
                buf.extend(black_box(0..count).map(|v| v as f32));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<f32>::new();
                buf.extend(black_box(0..count).map(|v| v as f32));
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);

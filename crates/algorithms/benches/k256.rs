//! Benchmarks for secp256k1 (K256) elliptic curve operations

use bitecc_algorithms::ec::k256::{base_point_g, generate_keypair, Scalar, Secp256k1Field, Secp256k1Point};
use bitecc_algorithms::U256;
use bitecc_params::SecFormat;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::OsRng;

/// Generate a random field element for benchmarking
fn random_field_element() -> Secp256k1Field {
    loop {
        if let Ok(fe) = Secp256k1Field::new(U256::random(&mut OsRng)) {
            return fe;
        }
    }
}

/// Generate a random scalar for benchmarking
fn random_scalar() -> Scalar {
    Scalar::reduce(&U256::random(&mut OsRng))
}

fn bench_field_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("k256_field");

    let a = random_field_element();
    let b = random_field_element();

    group.bench_function("add", |bench| bench.iter(|| black_box(a) + black_box(b)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("square", |bench| bench.iter(|| black_box(a).square()));
    group.bench_function("invert", |bench| bench.iter(|| black_box(a).invert()));
    group.bench_function("sqrt", |bench| bench.iter(|| black_box(a).sqrt()));

    group.finish();
}

fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("k256_point");

    let g = base_point_g();
    let p = g.mul(&random_scalar().to_u256());
    let k = random_scalar().to_u256();

    group.bench_function("add", |bench| bench.iter(|| black_box(&g).add(black_box(&p))));
    group.bench_function("double", |bench| bench.iter(|| black_box(&p).double()));
    group.bench_function("scalar_mul", |bench| bench.iter(|| black_box(&p).mul(black_box(&k))));

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("k256_sec");

    let p = base_point_g().mul(&random_scalar().to_u256());
    let compressed = p.sec(SecFormat::Compressed).unwrap();
    let uncompressed = p.sec(SecFormat::Uncompressed).unwrap();

    group.bench_function("sec_compressed", |bench| bench.iter(|| black_box(&p).sec_compressed()));
    group.bench_function("parse_compressed", |bench| {
        bench.iter(|| Secp256k1Point::parse(black_box(&compressed)))
    });
    group.bench_function("parse_uncompressed", |bench| {
        bench.iter(|| Secp256k1Point::parse(black_box(&uncompressed)))
    });

    group.finish();
}

fn bench_keypair_generation(c: &mut Criterion) {
    c.bench_function("k256_generate_keypair", |bench| {
        bench.iter(|| generate_keypair(&mut OsRng))
    });
}

criterion_group!(
    benches,
    bench_field_arithmetic,
    bench_point_operations,
    bench_serialization,
    bench_keypair_generation
);
criterion_main!(benches);

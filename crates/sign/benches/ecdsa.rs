//! Benchmarks for ECDSA over secp256k1.
//!
//! Covers key generation, signing in both message modes, verification
//! and the DER codec.

use bitecc_algorithms::U256;
use bitecc_sign::{verify, KeyPair, Message, Signature};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_keypair(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_secp256k1_keypair");
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

    group.bench_function("generate", |b| {
        b.iter(|| black_box(KeyPair::generate(&mut rng).unwrap()));
    });

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_secp256k1_sign");
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let pair = KeyPair::generate(&mut rng).unwrap();
    let z = U256::random(&mut rng);

    group.bench_function("digest", |b| {
        b.iter(|| black_box(pair.private_key().sign(black_box(z), &mut rng).unwrap()));
    });

    let data = [0x5au8; 1024];
    group.bench_function("hash160_1kb", |b| {
        b.iter(|| {
            black_box(
                pair.private_key()
                    .sign(Message::Hash160(black_box(&data)), &mut rng)
                    .unwrap(),
            )
        });
    });

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_secp256k1_verify");
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let pair = KeyPair::generate(&mut rng).unwrap();
    let z = U256::random(&mut rng);
    let signature = pair.private_key().sign(z, &mut rng).unwrap();

    group.bench_function("valid", |b| {
        b.iter(|| black_box(verify(pair.public_key(), black_box(z), &signature)));
    });

    group.finish();
}

fn bench_der(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_der");
    let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
    let pair = KeyPair::generate(&mut rng).unwrap();
    let signature = pair
        .private_key()
        .sign(U256::random(&mut rng), &mut rng)
        .unwrap();
    let der = signature.der();

    group.bench_function("encode", |b| b.iter(|| black_box(signature.der())));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(Signature::parse(black_box(&der)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_keypair, bench_sign, bench_verify, bench_der);
criterion_main!(benches);

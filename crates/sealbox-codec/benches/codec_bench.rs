//! Performance benchmarks for sealbox-codec.
//!
//! Run with: `cargo bench -p sealbox-codec`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sealbox_codec::{ChaChaPolyCodec, Codec, SymmetricKey, XChaChaPolyCodec};

// Short text payloads are the expected workload
const SIZES: [usize; 5] = [16, 64, 256, 1024, 4096];

fn payload(size: usize) -> String {
    "a".repeat(size)
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_encode");
    let key = SymmetricKey::new([0x42u8; 32]);
    let chacha = ChaChaPolyCodec::new();
    let xchacha = XChaChaPolyCodec::new();

    for size in SIZES {
        let plaintext = payload(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("chacha20", size), &size, |b, _| {
            b.iter(|| chacha.encode(black_box(&plaintext), black_box(&key)))
        });
        group.bench_with_input(BenchmarkId::new("xchacha20", size), &size, |b, _| {
            b.iter(|| xchacha.encode(black_box(&plaintext), black_box(&key)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec_decode");
    let key = SymmetricKey::new([0x42u8; 32]);
    let chacha = ChaChaPolyCodec::new();
    let xchacha = XChaChaPolyCodec::new();

    for size in SIZES {
        let plaintext = payload(size);
        let chacha_envelope = chacha.encode(&plaintext, &key).unwrap();
        let xchacha_envelope = xchacha.encode(&plaintext, &key).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("chacha20", size), &size, |b, _| {
            b.iter(|| chacha.decode(black_box(&chacha_envelope), black_box(&key)))
        });
        group.bench_with_input(BenchmarkId::new("xchacha20", size), &size, |b, _| {
            b.iter(|| xchacha.decode(black_box(&xchacha_envelope), black_box(&key)))
        });
    }

    group.finish();
}

fn bench_reject_tampered(c: &mut Criterion) {
    let key = SymmetricKey::new([0x42u8; 32]);
    let codec = ChaChaPolyCodec::new();
    let envelope = codec.encode(&payload(256), &key).unwrap();
    let wrong_key = SymmetricKey::new([0x43u8; 32]);

    c.bench_function("codec_reject_wrong_key_256", |b| {
        b.iter(|| codec.decode(black_box(&envelope), black_box(&wrong_key)))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_reject_tampered);
criterion_main!(benches);

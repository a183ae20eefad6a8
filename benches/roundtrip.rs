//! Criterion benchmarks for the compress and decompress pipelines.
//!
//! Run with:
//!   cargo bench --bench roundtrip

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lzs::default_coder;

/// Synthetic mixed corpus: repeated prose with interleaved noise.
fn corpus(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        out.extend_from_slice(b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ");
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.push((state % 64 + 32) as u8);
    }
    out.truncate(len);
    out
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for &size in &[4_096usize, 65_536] {
        let data = corpus(size);
        let coder = default_coder();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| coder.compress_to_vec(data).unwrap())
        });

        let packed = coder.compress_to_vec(&data).unwrap();
        // Throughput measured in *decompressed* bytes (the meaningful quantity).
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("decompress", size), &packed, |b, packed| {
            b.iter(|| coder.decompress_to_vec(packed).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);

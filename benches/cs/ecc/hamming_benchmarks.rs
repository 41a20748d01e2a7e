use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamcode::ecc::hamming::{correct, decode, encode};

fn data_of_len(len: usize) -> BitVec<u8, Msb0> {
    (0..len).map(|i| (i * 7 + 3) % 5 < 2).collect()
}

fn bench_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming");

    for &len in &[4usize, 64, 1024, 16384] {
        let data = data_of_len(len);
        let codeword = encode(&data);
        let mut damaged = codeword.clone();
        let flipped = !damaged[2];
        damaged.set(2, flipped);

        group.bench_with_input(BenchmarkId::new("encode", len), &data, |b, data| {
            b.iter(|| encode(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("correct", len), &damaged, |b, word| {
            b.iter(|| correct(black_box(word)))
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &damaged, |b, word| {
            b.iter(|| decode(black_box(word)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hamming);
criterion_main!(benches);

//! Throughput benchmarks for the dual-byte finder.
//!
//! Compares the word-at-a-time scan against a naive byte loop and the
//! SIMD-backed `memchr::memchr2`, which bracket where this implementation
//! should land: well above the byte loop, below wide-vector search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use twochr::find_either;

/// Haystack with no match until the final byte -- worst case for all three
/// implementations. Targets are ESC and BEL, the classic terminal-stream
/// pair this kind of scan gets pointed at.
fn generate_haystack(len: usize) -> Vec<u8> {
    let mut haystack = vec![b'n'; len];
    if let Some(last) = haystack.last_mut() {
        *last = 0x1B;
    }
    haystack
}

fn naive_find_either(haystack: &[u8], a: u8, b: u8) -> Option<usize> {
    haystack.iter().position(|&byte| byte == a || byte == b)
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_either/throughput");

    for len in [64usize, 1024, 16 * 1024, 256 * 1024] {
        let haystack = generate_haystack(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(
            BenchmarkId::new("word_at_a_time", len),
            &haystack,
            |b, h| {
                b.iter(|| black_box(find_either(h, 0x1B, 0x07)));
            },
        );
        group.bench_with_input(BenchmarkId::new("naive", len), &haystack, |b, h| {
            b.iter(|| black_box(naive_find_either(h, 0x1B, 0x07)));
        });
        group.bench_with_input(BenchmarkId::new("memchr2", len), &haystack, |b, h| {
            b.iter(|| black_box(memchr::memchr2(0x1B, 0x07, h)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);

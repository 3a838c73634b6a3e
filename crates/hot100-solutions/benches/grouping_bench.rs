//! Grouping benchmarks: sort key vs count key over the same word list.
//!
//! Run with: cargo bench -p hot100-solutions --bench grouping_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hot100_solutions::anagram::{group_with, CountKey, SortKey};

/// Deterministic lowercase words; roughly one anagram class per 8 words.
fn make_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|i| {
            let base = format!("{:x}", i / 8)
                .bytes()
                .map(|b| (b'a' + b % 26) as char)
                .collect::<String>();
            let mut chars: Vec<char> = format!("{base}word").chars().collect();
            // xorshift permutation so members of a class are real anagrams
            for k in (1..chars.len()).rev() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                chars.swap(k, (state % (k as u64 + 1)) as usize);
            }
            chars.into_iter().collect()
        })
        .collect()
}

fn grouping_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_anagrams");

    for size in [1_000, 10_000, 100_000] {
        let words = make_words(size);

        group.bench_with_input(BenchmarkId::new("sort_key", size), &words, |b, words| {
            b.iter(|| group_with(black_box(words.iter()), &SortKey).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("count_key", size), &words, |b, words| {
            b.iter(|| group_with(black_box(words.iter()), &CountKey).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, grouping_strategies);
criterion_main!(benches);

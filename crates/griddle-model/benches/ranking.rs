// Copyright (c) 2025 The griddle developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use griddle_model::{pattern::Pattern, perm::Permutation, ranker::Ranker};
use std::hint::black_box;

/// A deterministic bag of permutations of `1..=n`, produced by repeatedly
/// rotating and swapping the identity. Cheap to build and varied enough to
/// defeat branch predictors.
fn sample_permutations(n: usize, count: usize) -> Vec<Permutation> {
    let mut symbols: Vec<u8> = (1..=n as u8).collect();
    let mut out = Vec::with_capacity(count);
    for round in 0..count {
        symbols.rotate_left(1 + round % (n - 1));
        symbols.swap(round % n, (round * 7 + 3) % n);
        out.push(Permutation::new(symbols.clone()));
    }
    out
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for (n, pattern) in [
        (8, "--------"),
        (8, "---*----"),
        (12, "----********"),
        (16, "----************"),
    ] {
        let goal = Permutation::identity(n);
        let pattern = Pattern::parse(pattern).unwrap();
        let ranker = Ranker::new(&goal, &pattern).unwrap();
        let perms = sample_permutations(n, 1024);

        group.throughput(Throughput::Elements(perms.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n{}-k{}", n, ranker.nbsymbols())),
            &perms,
            |b, perms| {
                b.iter(|| {
                    let mut acc = 0usize;
                    for perm in perms {
                        let masked = ranker.mask(perm);
                        acc ^= ranker.rank(black_box(&masked)).unwrap().get();
                    }
                    acc
                })
            },
        );
    }

    group.finish();
}

fn bench_mask(c: &mut Criterion) {
    let goal = Permutation::identity(16);
    let pattern = Pattern::parse("--------********").unwrap();
    let ranker = Ranker::new(&goal, &pattern).unwrap();
    let perms = sample_permutations(16, 1024);

    c.bench_function("mask/n16-k8", |b| {
        b.iter(|| {
            for perm in &perms {
                black_box(ranker.mask(black_box(perm)));
            }
        })
    });
}

criterion_group!(benches, bench_rank, bench_mask);
criterion_main!(benches);

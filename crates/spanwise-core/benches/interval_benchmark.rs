// Copyright (c) 2025 Felix Kahle.
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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spanwise_core::{Interval, partition};
use std::hint::black_box;

/// Pairs covering every relation: disjoint, touching, overlapping, nested, equal.
fn pairs() -> Vec<(Interval<i64>, Interval<i64>)> {
    let base = Interval::new(0, 100);
    vec![
        (base, Interval::new(200, 300)),
        (base, Interval::new(100, 150)),
        (base, Interval::new(50, 150)),
        (base, Interval::new(25, 75)),
        (base, Interval::new(-50, 250)),
        (base, base),
    ]
}

fn bench_set_operations(c: &mut Criterion) {
    let pairs = pairs();
    let mut group = c.benchmark_group("set_operations");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("union", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(x.union(black_box(y)));
            }
        })
    });
    group.bench_function("intersection", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(x.intersection(black_box(y)));
            }
        })
    });
    group.bench_function("difference", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(x.difference(black_box(y)));
            }
        })
    });
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for size in [16i64, 256, 4096] {
        let parts = partition::from_limits((0..=size).map(|i| i * 10));
        group.bench_with_input(BenchmarkId::from_parameter(size), &parts, |b, parts| {
            b.iter(|| partition::locate(parts, black_box(&(size * 5 + 3))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_set_operations, bench_locate);
criterion_main!(benches);

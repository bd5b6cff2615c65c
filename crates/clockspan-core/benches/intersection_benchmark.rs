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

use clockspan_core::math::period::TimeInterval;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Every shape pairing with a representative overlap.
fn shape_pairs() -> Vec<(&'static str, TimeInterval<u32>, TimeInterval<u32>)> {
    let bounded = TimeInterval::from_endpoints(3_000, 10_000);
    let other_bounded = TimeInterval::from_endpoints(8_000, 12_000);
    let wrapping = TimeInterval::from_endpoints(7_000, 5_000);
    let other_wrapping = TimeInterval::from_endpoints(50_000, 40_000);
    let unbounded = TimeInterval::from_endpoints(1, 1);

    vec![
        ("bounded_bounded", bounded, other_bounded),
        ("bounded_wrapping", bounded, wrapping),
        ("wrapping_bounded", wrapping, bounded),
        ("wrapping_wrapping", wrapping, other_wrapping),
        ("wrapping_unbounded", wrapping, unbounded),
        ("unbounded_unbounded", unbounded, unbounded),
    ]
}

fn bench_intersection_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    group.throughput(Throughput::Elements(1));

    for (name, left, right) in shape_pairs() {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(left, right),
            |b, &(left, right)| b.iter(|| black_box(left).intersect(black_box(right))),
        );
    }

    group.finish();
}

fn bench_normalise(c: &mut Criterion) {
    let wrapping = TimeInterval::from_endpoints(7_000u32, 5_000u32);
    c.bench_function("normalise", |b| b.iter(|| black_box(wrapping).normalise()));
}

criterion_group!(benches, bench_intersection_matrix, bench_normalise);
criterion_main!(benches);

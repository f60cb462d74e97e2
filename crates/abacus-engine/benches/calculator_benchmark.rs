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

use abacus_engine::calculator::Calculator;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Deterministic pseudo-data; no RNG needed for a throughput baseline.
fn make_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 31 + 7) % 97) as f64 - 48.0).collect()
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [64usize, 1_024, 16_384] {
        let values = make_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("average", size), &values, |b, values| {
            let mut calculator = Calculator::new("bench");
            b.iter(|| black_box(calculator.average(black_box(values))));
        });

        group.bench_with_input(BenchmarkId::new("max", size), &values, |b, values| {
            let mut calculator = Calculator::new("bench");
            b.iter(|| black_box(calculator.max(black_box(values))));
        });

        group.bench_with_input(BenchmarkId::new("min", size), &values, |b, values| {
            let mut calculator = Calculator::new("bench");
            b.iter(|| black_box(calculator.min(black_box(values))));
        });
    }

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    c.bench_function("sum", |b| {
        let mut calculator = Calculator::new("bench");
        b.iter(|| black_box(calculator.sum(black_box(1234), black_box(5678))));
    });

    c.bench_function("divide", |b| {
        let mut calculator = Calculator::new("bench");
        b.iter(|| black_box(calculator.divide(black_box(1234.0), black_box(5.678))));
    });
}

criterion_group!(benches, bench_statistics, bench_arithmetic);
criterion_main!(benches);

//! Benchmarks for the buffer algebra.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavesmith::dsp::SampleBuffer;

use crate::BUFFER_LENS;

pub fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/algebra");

    for &len in BUFFER_LENS {
        let a = SampleBuffer::from_iter((0..len).map(|i| (i as f32 / len as f32) * 2.0 - 1.0));
        let b = SampleBuffer::from_iter((0..len).map(|i| i as f32 / len as f32));

        group.bench_with_input(BenchmarkId::new("concat", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).concat(black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("mix_sum", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).mix_sum(black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("mix_product", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).mix_product(black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("scale", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).scale(black_box(0.5)))
        });

        group.bench_with_input(BenchmarkId::new("repeat_4", len), &len, |bench, _| {
            bench.iter(|| black_box(&a).repeat(4))
        });
    }

    group.finish();
}

//! Benchmarks for WAV container encoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavesmith::io::write_wav;

use crate::{BUFFER_LENS, SAMPLE_RATE};

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("io/encode");

    for &len in BUFFER_LENS {
        let left: Vec<f32> = (0..len).map(|i| (i as f32 / len as f32) * 2.0 - 1.0).collect();
        let right: Vec<f32> = left.iter().map(|s| -s).collect();
        let mut out = Vec::with_capacity(44 + len * 4);

        group.bench_with_input(BenchmarkId::new("mono", len), &len, |b, _| {
            b.iter(|| {
                out.clear();
                write_wav(&mut out, black_box(&[&left[..]]), SAMPLE_RATE).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("stereo", len), &len, |b, _| {
            b.iter(|| {
                out.clear();
                write_wav(&mut out, black_box(&[&left[..], &right[..]]), SAMPLE_RATE).unwrap();
            })
        });
    }

    group.finish();
}

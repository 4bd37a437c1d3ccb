//! Benchmarks for the noise processes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavesmith::dsp::{Interpolation, Noise};

use crate::{BUFFER_LENS, SAMPLE_RATE};

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/noise");

    for &len in BUFFER_LENS {
        let secs = len as f32 / SAMPLE_RATE as f32;

        group.bench_with_input(BenchmarkId::new("uniform", len), &len, |b, _| {
            b.iter(|| {
                Noise::uniform(
                    black_box(0.5),
                    black_box(secs),
                    Some(42),
                    black_box(SAMPLE_RATE),
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("stepped", len), &len, |b, _| {
            b.iter(|| {
                Noise::stepped(
                    black_box(0.5),
                    black_box(secs),
                    48,
                    Interpolation::Linear,
                    Some(42),
                    black_box(SAMPLE_RATE),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

//! Benchmarks for waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavesmith::dsp::{Extent, Waveform};

use crate::{BUFFER_LENS, SAMPLE_RATE};

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/waveform");

    for &len in BUFFER_LENS {
        let secs = len as f32 / SAMPLE_RATE as f32;

        // Sine - transcendental per sample of one cycle
        let wave = Waveform::sine(440.0, 0.5);
        group.bench_with_input(BenchmarkId::new("sine", len), &len, |b, _| {
            b.iter(|| {
                wave.render(black_box(Extent::Seconds(secs)), black_box(SAMPLE_RATE))
                    .unwrap()
            })
        });

        // Sawtooth - linear ramp plus mirrored copy
        let wave = Waveform::sawtooth(440.0, 0.5);
        group.bench_with_input(BenchmarkId::new("sawtooth", len), &len, |b, _| {
            b.iter(|| {
                wave.render(black_box(Extent::Seconds(secs)), black_box(SAMPLE_RATE))
                    .unwrap()
            })
        });

        // Trapezoid - three piecewise segments per half period
        let wave = Waveform::trapezoid(440.0, 0.5, 0.5);
        group.bench_with_input(BenchmarkId::new("trapezoid", len), &len, |b, _| {
            b.iter(|| {
                wave.render(black_box(Extent::Seconds(secs)), black_box(SAMPLE_RATE))
                    .unwrap()
            })
        });
    }

    group.finish();
}

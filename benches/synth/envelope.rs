//! Benchmarks for breakpoint interpolation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavesmith::dsp::{Envelope, Interpolation};

use crate::BUFFER_LENS;

const POINTS: &[(f32, f32)] = &[(0.1, 1.0), (0.4, 0.6), (0.9, 0.3), (1.0, 0.0)];

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/envelope");

    for &len in BUFFER_LENS {
        let env = Envelope::from_fractions(POINTS, len).unwrap();

        group.bench_with_input(BenchmarkId::new("linear", len), &len, |b, _| {
            b.iter(|| black_box(&env).render(Interpolation::Linear))
        });

        group.bench_with_input(BenchmarkId::new("raised_cosine", len), &len, |b, _| {
            b.iter(|| black_box(&env).render(Interpolation::RaisedCosine))
        });
    }

    group.finish();
}

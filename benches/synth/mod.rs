//! Benchmarks for the synthesis primitives and the encoder.

mod algebra;
mod encode;
mod envelope;
mod noise;
mod waveform;

pub use algebra::bench_algebra;
pub use encode::bench_encode;
pub use envelope::bench_envelope;
pub use noise::bench_noise;
pub use waveform::bench_waveform;

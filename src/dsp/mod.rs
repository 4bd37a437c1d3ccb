//! Sample-domain synthesis primitives.
//!
//! These components are pure, whole-buffer computations: generators
//! produce immutable [`buffer::SampleBuffer`] values, envelopes
//! modulate them through elementwise multiplication, and the buffer
//! algebra composes the results. Nothing here touches the OS or holds
//! mutable global state, so every operation is deterministic given its
//! inputs (noise included, when seeded).

/// Immutable sample buffer and its composition algebra.
pub mod buffer;
/// Piecewise breakpoint interpolation (linear and raised cosine).
pub mod envelope;
/// Uniform and stepped noise processes with explicit seeding.
pub mod noise;
/// Periodic waveform generation, one analytic cycle at a time.
pub mod waveform;

pub use buffer::SampleBuffer;
pub use envelope::{Envelope, Interpolation};
pub use noise::Noise;
pub use waveform::{Extent, Waveform, WaveformKind};

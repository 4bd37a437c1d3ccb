//! Immutable sample buffer and its composition algebra.

/*
The Buffer Algebra
==================

Every sound in this crate is a SampleBuffer: an ordered, immutable
sequence of f32 samples in the nominal range [-1.0, +1.0] (not
enforced). Synthesis is composition of a handful of pure operators:

  concat       play a, then b
  repeat       play a, k whole times (k = 0 is empty, not an error)
  scale        multiply every sample by a scalar gain
  mix_sum      elementwise addition - layering two sounds
  mix_product  elementwise multiplication - applying an envelope

Length-mismatch policy
----------------------

mix_sum and mix_product of buffers with different lengths truncate to
the SHORTER operand. No zero-padding, no error. This is deliberate:
compositions gate a long tone with a short noise texture by relying on
the product ending where the texture ends. Callers that need
full-length mixing pad explicitly beforehand.

The mismatch is logged at debug level so a composition that shortens a
mix unintentionally can be traced with RUST_LOG=debug, but the
semantics never change.
*/

use crate::dsp::envelope::{Envelope, Interpolation};
use crate::Result;

/// An immutable, ordered sequence of audio samples.
///
/// Length is in samples, not seconds; use [`SampleBuffer::duration`]
/// to convert. Every operator returns a new buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
}

impl SampleBuffer {
    /// Wrap a vector of samples.
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// Collect samples from an iterator.
    pub fn from_iter(iter: impl IntoIterator<Item = f32>) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }

    /// The empty buffer (zero samples).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A buffer of `len` zero samples.
    pub fn silence(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    /// A buffer of zeros covering `secs` seconds at `sample_rate`.
    pub fn silence_secs(secs: f32, sample_rate: u32) -> Self {
        Self::silence(crate::secs_to_samples(secs, sample_rate))
    }

    /// Borrow the raw samples.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds at the given sample rate.
    pub fn duration(&self, sample_rate: u32) -> f32 {
        self.samples.len() as f32 / sample_rate as f32
    }

    /// Sequential append: play `self`, then `other`.
    pub fn concat(&self, other: &SampleBuffer) -> SampleBuffer {
        let mut samples = Vec::with_capacity(self.len() + other.len());
        samples.extend_from_slice(&self.samples);
        samples.extend_from_slice(&other.samples);
        SampleBuffer { samples }
    }

    /// `self` repeated `k` whole times. `k == 0` yields the empty buffer.
    pub fn repeat(&self, k: usize) -> SampleBuffer {
        let mut samples = Vec::with_capacity(self.len() * k);
        for _ in 0..k {
            samples.extend_from_slice(&self.samples);
        }
        SampleBuffer { samples }
    }

    /// Multiply every sample by the scalar `k`.
    pub fn scale(&self, k: f32) -> SampleBuffer {
        SampleBuffer {
            samples: self.samples.iter().map(|&s| s * k).collect(),
        }
    }

    /// Elementwise addition, truncated to the shorter operand.
    ///
    /// Layers two sounds. Summed full-scale signals can exceed the
    /// nominal range; the encoder clamps at quantization time.
    pub fn mix_sum(&self, other: &SampleBuffer) -> SampleBuffer {
        self.log_mismatch(other, "mix_sum");
        SampleBuffer {
            samples: self
                .samples
                .iter()
                .zip(other.samples.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }

    /// Elementwise multiplication, truncated to the shorter operand.
    ///
    /// This is how an envelope is applied to a waveform.
    pub fn mix_product(&self, other: &SampleBuffer) -> SampleBuffer {
        self.log_mismatch(other, "mix_product");
        SampleBuffer {
            samples: self
                .samples
                .iter()
                .zip(other.samples.iter())
                .map(|(&a, &b)| a * b)
                .collect(),
        }
    }

    /// Shape this buffer with an envelope over its full length.
    ///
    /// `points` are fractional breakpoints `(position in [0, 1],
    /// target amplitude)`, resolved against `self.len()`. Fails with
    /// `ConstraintViolation` if positions are not non-decreasing.
    pub fn envelope(
        &self,
        points: &[(f32, f32)],
        interpolation: Interpolation,
    ) -> Result<SampleBuffer> {
        let env = Envelope::from_fractions(points, self.len())?;
        Ok(self.mix_product(&env.render(interpolation)))
    }

    fn log_mismatch(&self, other: &SampleBuffer, op: &str) {
        if self.len() != other.len() {
            log::debug!(
                "{op} length mismatch ({} vs {}), truncating to {}",
                self.len(),
                other.len(),
                self.len().min(other.len())
            );
        }
    }
}

/// Mutable accumulator for building a long buffer out of many pieces.
///
/// The algebra itself is immutable; repeated `concat` in a loop is
/// quadratic. The sequencer appends through a builder instead and
/// takes the finished buffer once.
#[derive(Debug, Default)]
pub struct BufferBuilder {
    samples: Vec<f32>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a whole buffer.
    pub fn push(&mut self, buffer: &SampleBuffer) {
        self.samples.extend_from_slice(buffer.samples());
    }

    /// Current accumulated length in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Finish, taking ownership of the accumulated samples.
    pub fn build(self) -> SampleBuffer {
        SampleBuffer::new(self.samples)
    }
}

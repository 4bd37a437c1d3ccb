//! Piecewise breakpoint interpolation for amplitude envelopes.

/*
Envelope Signals
================

An envelope is a slow control signal multiplied into a waveform to
shape its amplitude over time. Here it is described by BREAKPOINTS:
(position, target amplitude) pairs. An implicit (0, 0.0) breakpoint
precedes the supplied list, so every envelope starts from silence
unless the first supplied breakpoint overrides position 0.

Positions come in two flavors, resolved at construction time:

  absolute   a sample index (from_indices)
  fractional a position in [0, 1] of a total length (from_fractions)

Between each consecutive pair (i0, a0) -> (i1, a1) the envelope emits
i1 - i0 samples using one of two segment shapes:

  Linear        a0 + t * (a1 - a0) / n
                Straight ramp. Cheap, punchy, audible corners.

  RaisedCosine  y - r * cos(t * pi / n)   with y = (a1+a0)/2,
                r = (a1-a0)/2
                Half a cosine period: eases in and out with zero
                slope at both segment ends. No corners, no clicks.

Positions must be non-decreasing. A violation is a caller bug and
fails fast with ConstraintViolation; it is never recovered.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::buffer::SampleBuffer;
use crate::{Error, Result};

/// Segment shape used between consecutive breakpoints.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    RaisedCosine,
}

/// An ordered breakpoint list with positions resolved to sample
/// indices, ready to render.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Resolved (index, amplitude) breakpoints, non-decreasing by
    /// index. Does not include the implicit leading (0, 0.0).
    breakpoints: Vec<(usize, f32)>,
}

impl Envelope {
    /// Build from absolute sample indices.
    pub fn from_indices(points: &[(usize, f32)]) -> Result<Self> {
        let mut last = 0usize;
        for &(index, _) in points {
            if index < last {
                return Err(Error::ConstraintViolation(format!(
                    "breakpoint positions must be non-decreasing (got {index} after {last})"
                )));
            }
            last = index;
        }
        Ok(Self {
            breakpoints: points.to_vec(),
        })
    }

    /// Build from fractional positions in [0, 1] of a total length in
    /// samples.
    pub fn from_fractions(points: &[(f32, f32)], len: usize) -> Result<Self> {
        // An `as usize` cast saturates NaN and negatives to 0, which
        // would slip past the non-decreasing check below.
        let mut resolved = Vec::with_capacity(points.len());
        for &(p, a) in points {
            if !p.is_finite() || p < 0.0 {
                return Err(Error::ConstraintViolation(format!(
                    "fractional positions must be finite and non-negative, got {p}"
                )));
            }
            resolved.push(((p * len as f32) as usize, a));
        }
        Self::from_indices(&resolved)
    }

    /// Build from fractional positions of a duration in seconds.
    pub fn from_fractions_secs(
        points: &[(f32, f32)],
        secs: f32,
        sample_rate: u32,
    ) -> Result<Self> {
        Self::from_fractions(points, crate::secs_to_samples(secs, sample_rate))
    }

    /// Total rendered length in samples (the last breakpoint index).
    pub fn len(&self) -> usize {
        self.breakpoints.last().map_or(0, |&(index, _)| index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the envelope to a buffer with the given segment shape.
    pub fn render(&self, interpolation: Interpolation) -> SampleBuffer {
        let mut samples = Vec::with_capacity(self.len());
        let (mut i0, mut a0) = (0usize, 0.0f32);
        for &(i1, a1) in &self.breakpoints {
            if i1 > i0 {
                segment(interpolation, a0, a1, i1 - i0, &mut samples);
            }
            (i0, a0) = (i1, a1);
        }
        SampleBuffer::new(samples)
    }
}

/// Emit `n` samples interpolating a0 -> a1 into `out`.
fn segment(interpolation: Interpolation, a0: f32, a1: f32, n: usize, out: &mut Vec<f32>) {
    match interpolation {
        Interpolation::Linear => {
            let step = (a1 - a0) / n as f32;
            out.extend((0..n).map(|t| a0 + t as f32 * step));
        }
        Interpolation::RaisedCosine => {
            let y = (a1 + a0) / 2.0;
            let r = (a1 - a0) / 2.0;
            out.extend((0..n).map(|t| y - r * (t as f32 * std::f32::consts::PI / n as f32).cos()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ramp_is_non_decreasing_and_reaches_target() {
        let env = Envelope::from_fractions(&[(0.0, 0.0), (1.0, 1.0)], 1_000).unwrap();
        let buf = env.render(Interpolation::Linear);

        assert_eq!(buf.len(), 1_000);
        let samples = buf.samples();
        assert!(samples.windows(2).all(|w| w[1] >= w[0]));
        assert!((samples[999] - 1.0).abs() < 2e-3, "last sample ≈ target");
    }

    #[test]
    fn implicit_leading_breakpoint_starts_from_silence() {
        let env = Envelope::from_indices(&[(10, 1.0)]).unwrap();
        let buf = env.render(Interpolation::Linear);
        assert_eq!(buf.samples()[0], 0.0);
    }

    #[test]
    fn raised_cosine_hits_segment_endpoints() {
        let env = Envelope::from_indices(&[(100, 1.0)]).unwrap();
        let buf = env.render(Interpolation::RaisedCosine);

        // t = 0: y - r*cos(0) = a0 exactly
        assert!((buf.samples()[0] - 0.0).abs() < 1e-6);
        // Approach to the target is flat (zero slope at the end)
        let s = buf.samples();
        assert!((s[99] - s[98]).abs() < (s[51] - s[50]).abs());
        assert!((s[99] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn multi_segment_piecewise_shape() {
        let env = Envelope::from_indices(&[(4, 1.0), (8, 0.5)]).unwrap();
        let buf = env.render(Interpolation::Linear);

        assert_eq!(buf.len(), 8);
        // Ramp up over [0, 4), ramp down over [4, 8)
        assert_eq!(buf.samples()[0], 0.0);
        assert_eq!(buf.samples()[4], 1.0);
        assert!(buf.samples()[7] < 1.0);
    }

    #[test]
    fn coincident_positions_emit_nothing() {
        let env = Envelope::from_indices(&[(5, 1.0), (5, 0.2), (10, 0.0)]).unwrap();
        assert_eq!(env.render(Interpolation::Linear).len(), 10);
    }

    #[test]
    fn decreasing_positions_fail_fast() {
        let err = Envelope::from_indices(&[(10, 1.0), (5, 0.0)]).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[test]
    fn fractions_resolve_against_total_length() {
        let env = Envelope::from_fractions(&[(0.5, 1.0), (1.0, 0.0)], 200).unwrap();
        assert_eq!(env.len(), 200);
        assert_eq!(env.render(Interpolation::Linear).len(), 200);
    }

    #[test]
    fn non_finite_or_negative_fractions_fail_fast() {
        for p in [f32::NAN, f32::INFINITY, -0.25] {
            let err = Envelope::from_fractions(&[(0.5, 1.0), (p, 0.0)], 200).unwrap_err();
            assert!(matches!(err, Error::ConstraintViolation(_)));
        }
    }

    #[test]
    fn fraction_secs_resolve_against_a_duration() {
        let env = Envelope::from_fractions_secs(&[(0.5, 1.0), (1.0, 0.0)], 0.01, 48_000).unwrap();
        assert_eq!(env.len(), 480);
        assert_eq!(env.render(Interpolation::Linear).len(), 480);
    }
}

//! Periodic waveform generation.

/*
Waveform Generation
===================

A generator computes ONE period of its shape analytically, then tiles
it a whole number of times. There is no phase accumulator and no
state: the cycle is a closed-form function of the sample index.

  period P = round(sample_rate / frequency)   (in samples)

All shapes except the sine are built from a half period and its
negation, so one cycle is 2 * (P / 2) samples (one short of P when P
is odd); the triangle works in quarter periods the same way.

  Sine       a * sin(2*pi * t / P) over the full period
  Square     +a for the first half period, -a for the second
  Sawtooth   linear ramp 0 -> a over the half period, then the
             reversed ramp negated
  Triangle   quarter ramp 0 -> a, quarter ramp a -> 0, then the whole
             half negated
  Trapezoid  attack ramp, plateau at a, symmetric decay; crest in
             [0, 1] sets the plateau fraction of the half period
             (crest = 1 degenerates to a square half, crest = 0 to a
             triangle half)

The extent is EITHER a duration in seconds or a whole-cycle count;
the two cases are separate `Extent` variants, so supplying both or
neither cannot be expressed. A duration shorter than one period
yields an empty buffer, not an error.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::TAU;

use crate::dsp::buffer::SampleBuffer;
use crate::{Error, Result};

/// Closed set of waveform shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveformKind {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    /// Trapezoid with the given plateau fraction of the half period.
    Trapezoid { crest: f32 },
}

/// How long to run a generator: exactly one of a duration or a whole
/// cycle count.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Duration in seconds; truncated to a whole number of cycles.
    Seconds(f32),
    /// Exact number of cycles.
    Cycles(u32),
}

/// A periodic waveform: shape, frequency (Hz), peak amplitude.
#[derive(Debug, Clone, Copy)]
pub struct Waveform {
    kind: WaveformKind,
    frequency: f32,
    amplitude: f32,
}

impl Waveform {
    pub fn new(kind: WaveformKind, frequency: f32, amplitude: f32) -> Self {
        Self {
            kind,
            frequency,
            amplitude,
        }
    }

    pub fn sine(frequency: f32, amplitude: f32) -> Self {
        Self::new(WaveformKind::Sine, frequency, amplitude)
    }

    pub fn square(frequency: f32, amplitude: f32) -> Self {
        Self::new(WaveformKind::Square, frequency, amplitude)
    }

    pub fn sawtooth(frequency: f32, amplitude: f32) -> Self {
        Self::new(WaveformKind::Sawtooth, frequency, amplitude)
    }

    pub fn triangle(frequency: f32, amplitude: f32) -> Self {
        Self::new(WaveformKind::Triangle, frequency, amplitude)
    }

    pub fn trapezoid(frequency: f32, amplitude: f32, crest: f32) -> Self {
        Self::new(WaveformKind::Trapezoid { crest }, frequency, amplitude)
    }

    /// Render the waveform over the given extent.
    pub fn render(&self, extent: Extent, sample_rate: u32) -> Result<SampleBuffer> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "frequency must be positive, got {}",
                self.frequency
            )));
        }
        if let WaveformKind::Trapezoid { crest } = self.kind {
            if !(0.0..=1.0).contains(&crest) {
                return Err(Error::InvalidParameters(format!(
                    "trapezoid crest must be within [0, 1], got {crest}"
                )));
            }
        }

        let period = (sample_rate as f32 / self.frequency).round() as usize;
        if period == 0 {
            return Err(Error::InvalidParameters(format!(
                "frequency {} Hz is above the sample rate {}",
                self.frequency, sample_rate
            )));
        }

        let cycles = match extent {
            Extent::Cycles(n) => n as usize,
            // Truncates: a duration shorter than one period is empty.
            Extent::Seconds(secs) => crate::secs_to_samples(secs, sample_rate) / period,
        };

        Ok(SampleBuffer::new(self.one_cycle(period)).repeat(cycles))
    }

    /// One analytic cycle of the shape, `period` samples long for the
    /// sine and `2 * (period / 2)` (triangle: `4 * (period / 4)`) for
    /// the half-period shapes.
    fn one_cycle(&self, period: usize) -> Vec<f32> {
        let amp = self.amplitude;
        match self.kind {
            WaveformKind::Sine => (0..period)
                .map(|t| amp * (TAU * t as f32 / period as f32).sin())
                .collect(),

            WaveformKind::Square => {
                let half = period / 2;
                let mut cycle = vec![amp; half];
                cycle.extend(std::iter::repeat(-amp).take(half));
                cycle
            }

            WaveformKind::Sawtooth => {
                let half = period / 2;
                if half == 0 {
                    return Vec::new();
                }
                let k = amp / half as f32;
                let rise: Vec<f32> = (0..half).map(|t| t as f32 * k).collect();
                let mut cycle = rise.clone();
                cycle.extend(rise.iter().rev().map(|&s| -s));
                cycle
            }

            WaveformKind::Triangle => {
                let quarter = period / 4;
                if quarter == 0 {
                    return Vec::new();
                }
                let k = amp / quarter as f32;
                let mut half: Vec<f32> = (0..quarter).map(|t| t as f32 * k).collect();
                half.extend((0..quarter).map(|t| amp - t as f32 * k));
                let mut cycle = half.clone();
                cycle.extend(half.iter().map(|&s| -s));
                cycle
            }

            WaveformKind::Trapezoid { crest } => {
                let half = period / 2;
                let attack = (half as f32 * (1.0 - crest) / 2.0) as usize;
                let plateau = half - 2 * attack;
                let mut first: Vec<f32> = Vec::with_capacity(half);
                if attack > 0 {
                    let k = amp / attack as f32;
                    first.extend((0..attack).map(|t| t as f32 * k));
                    first.extend(std::iter::repeat(amp).take(plateau));
                    first.extend((0..attack).map(|t| amp - t as f32 * k));
                } else {
                    first.extend(std::iter::repeat(amp).take(plateau));
                }
                let mut cycle = first.clone();
                cycle.extend(first.iter().map(|&s| -s));
                cycle
            }
        }
    }
}

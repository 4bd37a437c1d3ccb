//! Uniform and stepped noise processes.
//!
//! Randomness is always drawn from a dedicated, explicitly seeded
//! generator instance (`Pcg32`); there is no shared global RNG state.
//! Passing the same seed reproduces the exact sample sequence, which
//! sound-effect recipes rely on for stable assets.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::dsp::buffer::SampleBuffer;
use crate::dsp::envelope::{Envelope, Interpolation};
use crate::{Error, Result};

/// Noise process constructors.
pub struct Noise;

impl Noise {
    /// Independent samples drawn uniformly from `[-amplitude, amplitude]`
    /// over `secs` seconds.
    pub fn uniform(
        amplitude: f32,
        secs: f32,
        seed: Option<u64>,
        sample_rate: u32,
    ) -> Result<SampleBuffer> {
        check_amplitude(amplitude)?;
        let mut rng = make_rng(seed);
        let n = crate::secs_to_samples(secs, sample_rate);
        Ok(SampleBuffer::from_iter(
            (0..n).map(|_| rng.random_range(-amplitude..=amplitude)),
        ))
    }

    /// Band-limited noise texture: one random target amplitude every
    /// `step_period` samples, interpolated through the envelope
    /// machinery.
    ///
    /// The result changes character every `step_period` samples and
    /// ends at the last step boundary, so it can be shorter than
    /// `secs`; layering under a longer tone goes through the
    /// truncating `mix_sum`.
    pub fn stepped(
        amplitude: f32,
        secs: f32,
        step_period: usize,
        interpolation: Interpolation,
        seed: Option<u64>,
        sample_rate: u32,
    ) -> Result<SampleBuffer> {
        check_amplitude(amplitude)?;
        if step_period == 0 {
            return Err(Error::InvalidParameters(
                "stepped noise period must be at least one sample".into(),
            ));
        }

        let mut rng = make_rng(seed);
        let n = crate::secs_to_samples(secs, sample_rate);
        let breakpoints: Vec<(usize, f32)> = (0..n)
            .step_by(step_period)
            .map(|i| (i, rng.random_range(-amplitude..=amplitude)))
            .collect();

        // Positions are multiples of the period, already monotonic.
        let env = Envelope::from_indices(&breakpoints)?;
        Ok(env.render(interpolation))
    }

    /// [`Noise::stepped`] with the step rate given in Hz instead of
    /// samples.
    pub fn stepped_hz(
        amplitude: f32,
        secs: f32,
        step_hz: f32,
        interpolation: Interpolation,
        seed: Option<u64>,
        sample_rate: u32,
    ) -> Result<SampleBuffer> {
        if !step_hz.is_finite() || step_hz <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "step rate must be positive, got {step_hz}"
            )));
        }
        let period = (sample_rate as f32 / step_hz).round() as usize;
        Self::stepped(amplitude, secs, period.max(1), interpolation, seed, sample_rate)
    }
}

// The sampled range is [-amplitude, amplitude]; a negative or
// non-finite bound would make it empty and panic inside the RNG.
fn check_amplitude(amplitude: f32) -> Result<()> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(Error::InvalidParameters(format!(
            "noise amplitude must be finite and non-negative, got {amplitude}"
        )));
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> Pcg32 {
    match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    }
}

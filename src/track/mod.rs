//! Track - a group of per-channel buffers sharing a timeline.
//!
//! A track is a fixed tuple of one (mono) or two (stereo) sample
//! buffers. It extends the buffer algebra channel-wise and is the unit
//! consumed by the encoder and the playback adapters. Channel lengths
//! may legitimately differ mid-composition (the algebra truncates);
//! the encoder is where equal lengths are enforced.

use crate::dsp::buffer::SampleBuffer;
use crate::{Error, Result};

/// Supported channel counts.
pub const MAX_CHANNELS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    channels: Vec<SampleBuffer>,
}

impl Track {
    /// Single-channel track.
    pub fn mono(buffer: SampleBuffer) -> Self {
        Self {
            channels: vec![buffer],
        }
    }

    /// Two-channel track.
    pub fn stereo(left: SampleBuffer, right: SampleBuffer) -> Self {
        Self {
            channels: vec![left, right],
        }
    }

    /// Clone one buffer across `channel_count` channels.
    pub fn broadcast(buffer: &SampleBuffer, channel_count: usize) -> Result<Self> {
        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(Error::InvalidParameters(format!(
                "unsupported channel count {channel_count} (must be 1 or 2)"
            )));
        }
        Ok(Self {
            channels: vec![buffer.clone(); channel_count],
        })
    }

    /// Stereo track with the buffer panned by `spread`: channel 0 is
    /// scaled by `1 - spread`, channel 1 by `1 + spread`. Alternating
    /// the sign of `spread` across a sequence of sounds bounces them
    /// between the speakers.
    pub fn stereo_spread(buffer: &SampleBuffer, spread: f32) -> Self {
        Self::stereo(buffer.scale(1.0 - spread), buffer.scale(1.0 + spread))
    }

    pub fn channels(&self) -> &[SampleBuffer] {
        &self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Length of the longest channel, in samples.
    pub fn max_len(&self) -> usize {
        self.channels.iter().map(SampleBuffer::len).max().unwrap_or(0)
    }

    /// Duration of the longest channel in seconds.
    pub fn duration(&self, sample_rate: u32) -> f32 {
        self.max_len() as f32 / sample_rate as f32
    }

    /// Channel-wise sequential append. Channel counts must match.
    pub fn concat(&self, other: &Track) -> Result<Track> {
        self.zip_channels(other, "concat", SampleBuffer::concat)
    }

    /// Channel-wise elementwise sum (truncating per channel, like the
    /// buffer algebra). Channel counts must match.
    pub fn mix_sum(&self, other: &Track) -> Result<Track> {
        self.zip_channels(other, "mix_sum", SampleBuffer::mix_sum)
    }

    /// Append one buffer to every channel.
    pub fn concat_buffer(&self, buffer: &SampleBuffer) -> Track {
        Track {
            channels: self.channels.iter().map(|c| c.concat(buffer)).collect(),
        }
    }

    /// Sum one buffer into every channel (truncating per channel).
    pub fn mix_sum_buffer(&self, buffer: &SampleBuffer) -> Track {
        Track {
            channels: self.channels.iter().map(|c| c.mix_sum(buffer)).collect(),
        }
    }

    fn zip_channels(
        &self,
        other: &Track,
        op: &str,
        f: impl Fn(&SampleBuffer, &SampleBuffer) -> SampleBuffer,
    ) -> Result<Track> {
        if self.channel_count() != other.channel_count() {
            return Err(Error::InvalidParameters(format!(
                "{op} requires matching channel counts, got {} and {}",
                self.channel_count(),
                other.channel_count()
            )));
        }
        Ok(Track {
            channels: self
                .channels
                .iter()
                .zip(other.channels.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

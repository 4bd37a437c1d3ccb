//! RIFF/WAVE PCM container encoding.

/*
The Container
=============

A canonical WAV file is three chunks, all integers little-endian:

  "RIFF" <u32 total - 8> "WAVE"
  "fmt " <u32 16> <u16 format=1 (PCM)> <u16 channels> <u32 rate>
         <u32 byte rate> <u16 block align> <u16 bits = 16>
  "data" <u32 byte length> <interleaved i16 samples>

Samples are interleaved FRAME-major: frame i carries one sample from
each channel in channel order. Block align is the byte size of one
frame (channels * 2); byte rate is rate * block align.

Quantization maps a float sample to a signed 16-bit integer:

  pcm = trunc(clamp(s, -1, 1) * 32767)

Clamping is a deliberate policy choice: summed full-scale layers can
exceed the nominal range, and letting them wrap around produces loud
broadband garbage. Within [-1, 1] the mapping is exact truncation, so
a decoded sample is within 1/32767 of the original.
*/

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dsp::buffer::SampleBuffer;
use crate::track::{Track, MAX_CHANNELS};
use crate::{Error, Result};

const PCM_FORMAT_CODE: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const PEAK: f32 = i16::MAX as f32;

/// Encode equal-length channels as 16-bit PCM WAV into `w`.
///
/// One or two channels; unequal lengths fail with
/// `InvalidParameters` - the buffer algebra's truncation policy is
/// not applied implicitly here, callers align channels first.
pub fn write_wav<W: Write>(w: &mut W, channels: &[&[f32]], sample_rate: u32) -> Result<()> {
    if channels.is_empty() || channels.len() > MAX_CHANNELS {
        return Err(Error::InvalidParameters(format!(
            "unsupported channel count {} (must be 1 or 2)",
            channels.len()
        )));
    }
    let frames = channels[0].len();
    if channels.iter().any(|c| c.len() != frames) {
        return Err(Error::InvalidParameters(format!(
            "channel lengths must be equal at encode time, got {:?}",
            channels.iter().map(|c| c.len()).collect::<Vec<_>>()
        )));
    }

    let channel_count = channels.len() as u16;
    let block_align = channel_count * (BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_len = (frames * block_align as usize) as u32;

    w.write_all(b"RIFF")?;
    w.write_all(&(36 + data_len).to_le_bytes())?;
    w.write_all(b"WAVE")?;

    w.write_all(b"fmt ")?;
    w.write_all(&16u32.to_le_bytes())?;
    w.write_all(&PCM_FORMAT_CODE.to_le_bytes())?;
    w.write_all(&channel_count.to_le_bytes())?;
    w.write_all(&sample_rate.to_le_bytes())?;
    w.write_all(&byte_rate.to_le_bytes())?;
    w.write_all(&block_align.to_le_bytes())?;
    w.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    w.write_all(b"data")?;
    w.write_all(&data_len.to_le_bytes())?;
    for frame in 0..frames {
        for channel in channels {
            w.write_all(&quantize(channel[frame]).to_le_bytes())?;
        }
    }
    Ok(())
}

/// Float sample to signed 16-bit PCM: clamp, scale, truncate.
#[inline]
fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * PEAK) as i16
}

impl SampleBuffer {
    /// Write this buffer as a mono WAV file.
    pub fn write<P: AsRef<Path>>(&self, path: P, sample_rate: u32) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        write_wav(&mut file, &[self.samples()], sample_rate)?;
        file.flush()?;
        Ok(())
    }
}

impl Track {
    /// Write this track as a WAV file, one container channel per
    /// track channel.
    pub fn write<P: AsRef<Path>>(&self, path: P, sample_rate: u32) -> Result<()> {
        let channels: Vec<&[f32]> = self.channels().iter().map(|c| c.samples()).collect();
        let mut file = BufWriter::new(File::create(path)?);
        write_wav(&mut file, &channels, sample_rate)?;
        file.flush()?;
        Ok(())
    }
}

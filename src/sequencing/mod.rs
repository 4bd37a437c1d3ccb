//! Timeline assembly: concatenating tracks with silence gaps.

use crate::dsp::buffer::{BufferBuilder, SampleBuffer};
use crate::track::Track;
use crate::{Error, Result};

/// Concatenate `tracks` into one track with a `gap_secs` silence
/// before the first, between every pair, and after the last.
///
/// All tracks must share a channel count. An empty input yields a
/// stereo track of exactly two gap-length silences (the leading and
/// trailing gaps with no content between them).
pub fn merge_sequence(tracks: &[Track], gap_secs: f32, sample_rate: u32) -> Result<Track> {
    let channel_count = match tracks.first() {
        Some(first) => first.channel_count(),
        None => 2,
    };
    for track in tracks {
        if track.channel_count() != channel_count {
            return Err(Error::InvalidParameters(format!(
                "merge_sequence requires uniform channel counts, got {} and {}",
                channel_count,
                track.channel_count()
            )));
        }
    }

    // One silence buffer, reused for every gap.
    let gap = SampleBuffer::silence_secs(gap_secs, sample_rate);
    let content: usize = tracks.iter().map(Track::max_len).sum();
    let total = content + (tracks.len() + 1) * gap.len();

    let mut builders: Vec<BufferBuilder> = (0..channel_count)
        .map(|_| BufferBuilder::with_capacity(total))
        .collect();

    for builder in &mut builders {
        builder.push(&gap);
    }
    for (index, track) in tracks.iter().enumerate() {
        for (builder, channel) in builders.iter_mut().zip(track.channels()) {
            if index > 0 {
                builder.push(&gap);
            }
            builder.push(channel);
        }
    }
    for builder in &mut builders {
        builder.push(&gap);
    }

    let mut channels = builders.into_iter().map(BufferBuilder::build);
    Ok(match channel_count {
        1 => Track::mono(channels.next().unwrap()),
        _ => {
            let left = channels.next().unwrap();
            let right = channels.next().unwrap();
            Track::stereo(left, right)
        }
    })
}

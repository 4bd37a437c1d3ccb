//! Output adapters that consume finished tracks.
//!
//! Playback is a capability injected by the caller, never probed for
//! by the synthesis core: batch pipelines pass [`NullPlayback`] (or
//! nothing at all), interactive tools pass
//! [`SystemAudioPlayback`] (feature `playback`). Nothing in `dsp`,
//! `sequencing`, or `io` depends on this module.

use std::thread;
use std::time::Duration;

use crate::track::Track;
use crate::Result;

#[cfg(feature = "playback")]
mod system;
#[cfg(feature = "playback")]
pub use system::SystemAudioPlayback;

/// A sink for finished tracks.
pub trait Playback {
    /// Play the track to completion (blocking).
    fn play(&mut self, track: &Track, sample_rate: u32) -> Result<()>;
}

/// Discards everything. The playback capability for headless runs.
#[derive(Debug, Default)]
pub struct NullPlayback;

impl Playback for NullPlayback {
    fn play(&mut self, _track: &Track, _sample_rate: u32) -> Result<()> {
        Ok(())
    }
}

/// Play tracks one after another with a fixed delay before each.
pub fn play_sequence<P: Playback>(
    playback: &mut P,
    tracks: &[Track],
    delay_secs: f32,
    sample_rate: u32,
) -> Result<()> {
    for track in tracks {
        thread::sleep(Duration::from_secs_f32(delay_secs));
        playback.play(track, sample_rate)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::buffer::SampleBuffer;

    #[test]
    fn null_playback_accepts_any_track() {
        let track = Track::mono(SampleBuffer::silence(10));
        let mut sink = NullPlayback;
        assert!(sink.play(&track, 48_000).is_ok());
    }

    #[test]
    fn play_sequence_visits_every_track() {
        struct Counting(usize);
        impl Playback for Counting {
            fn play(&mut self, _track: &Track, _sample_rate: u32) -> Result<()> {
                self.0 += 1;
                Ok(())
            }
        }

        let tracks = vec![
            Track::mono(SampleBuffer::silence(4)),
            Track::mono(SampleBuffer::silence(4)),
        ];
        let mut sink = Counting(0);
        play_sequence(&mut sink, &tracks, 0.0, 48_000).unwrap();
        assert_eq!(sink.0, 2);
    }
}

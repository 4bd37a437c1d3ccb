pub mod dsp;
pub mod error;
pub mod io;
pub mod playback; // Output adapters consuming finished tracks
pub mod sequencing; // Timeline assembly with silence gaps
pub mod track;

pub use error::{Error, Result};

/// Sample rate used by the reference asset pipeline (48 kHz). Every
/// duration-to-samples conversion takes the rate as a parameter; this is
/// only the conventional default.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Convert a duration in seconds to a whole sample count.
pub(crate) fn secs_to_samples(secs: f32, sample_rate: u32) -> usize {
    (secs * sample_rate as f32) as usize
}

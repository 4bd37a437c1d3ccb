//! System audio playback through cpal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::playback::Playback;
use crate::track::Track;
use crate::{Error, Result};

/// Blocking playback through the default system output device.
///
/// The finished track is interleaved into a ring buffer up front; the
/// stream callback only pops samples, so no allocation happens on the
/// audio thread. Mono tracks are duplicated across the device's
/// output channels.
pub struct SystemAudioPlayback {
    device: cpal::Device,
    channels: cpal::ChannelCount,
}

impl SystemAudioPlayback {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Playback("no default output device available".into()))?;
        let channels = device
            .default_output_config()
            .map_err(|e| Error::Playback(format!("failed to fetch default output config: {e}")))?
            .channels();
        Ok(Self { device, channels })
    }
}

impl Playback for SystemAudioPlayback {
    fn play(&mut self, track: &Track, sample_rate: u32) -> Result<()> {
        let frames = track.max_len();
        if frames == 0 {
            return Ok(());
        }

        let out_channels = self.channels as usize;
        let total = frames * out_channels;
        let (mut tx, mut rx) = rtrb::RingBuffer::<f32>::new(total);
        for frame in 0..frames {
            for slot in 0..out_channels {
                let channel = &track.channels()[slot % track.channel_count()];
                let sample = channel.samples().get(frame).copied().unwrap_or(0.0);
                let _ = tx.push(sample);
            }
        }

        let finished = Arc::new(AtomicBool::new(false));
        let finished_cb = finished.clone();

        let config = cpal::StreamConfig {
            channels: self.channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };
        let stream = self
            .device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for slot in data.iter_mut() {
                        *slot = rx.pop().unwrap_or(0.0);
                    }
                    if rx.is_empty() {
                        finished_cb.store(true, Ordering::Release);
                    }
                },
                |err| log::warn!("output stream error: {err}"),
                None,
            )
            .map_err(|e| Error::Playback(format!("failed to build output stream: {e}")))?;
        stream
            .play()
            .map_err(|e| Error::Playback(format!("failed to start output stream: {e}")))?;

        while !finished.load(Ordering::Acquire) {
            thread::sleep(Duration::from_millis(10));
        }
        Ok(())
    }
}

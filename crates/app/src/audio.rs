//! WAV playback backend over the default output device.
//!
//! The output stream is built lazily on `resume()`, which is the native
//! analogue of the suspended audio context the piece was written against:
//! until the first music toggle no device is touched at all.

use std::{
    path::Path,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleRate, Stream, StreamConfig,
};
use crescent_core::{AudioBackend, ContextState, CrescentError, Result};

pub struct CpalMusic {
    samples: Arc<Vec<f32>>,
    channels: u16,
    sample_rate: u32,
    playing: Arc<AtomicBool>,
    cursor: Arc<AtomicUsize>,
    stream: Option<Stream>,
}

impl CpalMusic {
    /// Decodes the whole track into memory. The piece loops a short
    /// background phrase, so streaming from disk buys nothing.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = hound::WavReader::open(path)
            .map_err(|err| CrescentError::msg(format!("failed to read {}: {err}", path.display())))?;
        let spec = reader.spec();

        let decode_err =
            |err: hound::Error| CrescentError::msg(format!("failed to decode samples: {err}"));
        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<std::result::Result<_, _>>()
                .map_err(decode_err)?,
            hound::SampleFormat::Int => {
                let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|sample| sample.map(|value| value as f32 / scale))
                    .collect::<std::result::Result<_, _>>()
                    .map_err(decode_err)?
            }
        };
        if samples.is_empty() {
            return Err(CrescentError::msg("music track contains no samples"));
        }

        Ok(Self {
            samples: Arc::new(samples),
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            playing: Arc::new(AtomicBool::new(false)),
            cursor: Arc::new(AtomicUsize::new(0)),
            stream: None,
        })
    }

    fn build_stream(&self) -> Result<Stream> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| CrescentError::msg("no audio output device available"))?;
        let config = StreamConfig {
            channels: self.channels,
            sample_rate: SampleRate(self.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let samples = self.samples.clone();
        let playing = self.playing.clone();
        let cursor = self.cursor.clone();
        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if !playing.load(Ordering::Relaxed) {
                        data.fill(0.0);
                        return;
                    }
                    let mut pos = cursor.load(Ordering::Relaxed);
                    for sample in data.iter_mut() {
                        *sample = samples[pos];
                        pos = (pos + 1) % samples.len();
                    }
                    cursor.store(pos, Ordering::Relaxed);
                },
                |err| tracing::warn!(%err, "audio stream error"),
                None,
            )
            .map_err(|err| CrescentError::msg(format!("failed to open audio stream: {err}")))?;
        stream
            .play()
            .map_err(|err| CrescentError::msg(format!("failed to start audio stream: {err}")))?;
        Ok(stream)
    }
}

impl AudioBackend for CpalMusic {
    fn state(&self) -> ContextState {
        if self.stream.is_some() {
            ContextState::Running
        } else {
            ContextState::Suspended
        }
    }

    fn resume(&mut self) {
        if self.stream.is_some() {
            return;
        }
        match self.build_stream() {
            Ok(stream) => self.stream = Some(stream),
            // Stay suspended; the parked toggle will simply never run.
            Err(err) => tracing::warn!(%err, "audio context failed to resume"),
        }
    }

    fn has_track(&self) -> bool {
        true
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    fn begin_loop(&mut self) {
        self.playing.store(true, Ordering::Relaxed);
    }

    fn pause(&mut self) {
        // The cursor is left where it is so playback resumes mid-phrase.
        self.playing.store(false, Ordering::Relaxed);
    }
}

use std::sync::{Arc, Mutex, PoisonError};

use rodio::cpal::{
    self, SampleFormat,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use tracing::{info, warn};

use crate::audio::{clip::AudioClip, error::AudioError};

/// One in-progress microphone recording. The device stays open for as long
/// as the session lives; incoming chunks accumulate in a shared buffer that
/// the capture callback writes from the audio thread.
pub struct CaptureSession {
    stream: cpal::Stream,
    buffer: Arc<Mutex<Vec<f32>>>,
    sample_rate: u32,
    channels: u16,
}

impl CaptureSession {
    /// Opens the default input device and starts buffering immediately.
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| AudioError::InputDevice("no input device available".into()))?;
        let config = device
            .default_input_config()
            .map_err(|e| AudioError::InputDevice(e.to_string()))?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels();
        let sample_format = config.sample_format();
        let stream_config = config.config();

        let buffer = Arc::new(Mutex::new(Vec::new()));

        let stream = match sample_format {
            SampleFormat::F32 => {
                let sink = buffer.clone();
                device.build_input_stream(
                    &stream_config,
                    move |data: &[f32], _: &cpal::InputCallbackInfo| {
                        push_chunk(&sink, data.iter().copied());
                    },
                    log_stream_error,
                    None,
                )
            }
            SampleFormat::I16 => {
                let sink = buffer.clone();
                device.build_input_stream(
                    &stream_config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        push_chunk(&sink, data.iter().map(|s| *s as f32 / i16::MAX as f32));
                    },
                    log_stream_error,
                    None,
                )
            }
            SampleFormat::U16 => {
                let sink = buffer.clone();
                device.build_input_stream(
                    &stream_config,
                    move |data: &[u16], _: &cpal::InputCallbackInfo| {
                        push_chunk(
                            &sink,
                            data.iter()
                                .map(|s| (*s as f32 / u16::MAX as f32) * 2.0 - 1.0),
                        );
                    },
                    log_stream_error,
                    None,
                )
            }
            other => {
                return Err(AudioError::Stream(format!(
                    "unsupported capture sample format {other:?}"
                )));
            }
        }
        .map_err(|e| AudioError::Stream(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        info!(sample_rate, channels, "capture session opened");

        Ok(Self {
            stream,
            buffer,
            sample_rate,
            channels,
        })
    }

    /// Stops capture, releases the input device and concatenates the
    /// buffered chunks into one finished clip.
    pub fn finish(self) -> AudioClip {
        drop(self.stream);
        let samples = std::mem::take(
            &mut *self
                .buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        info!(samples = samples.len(), "capture session finished");
        AudioClip::new(samples, self.sample_rate, self.channels)
    }
}

fn push_chunk(buffer: &Arc<Mutex<Vec<f32>>>, samples: impl Iterator<Item = f32>) {
    if let Ok(mut buf) = buffer.lock() {
        buf.extend(samples);
    }
}

fn log_stream_error(error: cpal::StreamError) {
    warn!("capture stream error: {error}");
}

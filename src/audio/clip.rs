use std::{sync::Arc, time::Duration};

use rodio::buffer::SamplesBuffer;

/// A finished recording: every captured chunk concatenated into one playable
/// unit. Samples are shared, so cloning a clip into the form is cheap.
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    channels: u16,
}

impl AudioClip {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples: Arc::new(samples),
            sample_rate,
            channels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 || self.channels == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as u64 / self.channels as u64;
        Duration::from_secs_f64(frames as f64 / self.sample_rate as f64)
    }

    /// A fresh playback source starting at the beginning of the clip.
    pub fn source(&self) -> SamplesBuffer {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.as_slice())
    }

    /// The clip as a 16-bit PCM WAV container. The container is fixed
    /// whatever the capture side produced; no transcoding beyond sample
    /// conversion happens here.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let data_len = (self.samples.len() * 2) as u32;
        let byte_rate = self.sample_rate * self.channels as u32 * 2;
        let block_align = self.channels * 2;

        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&self.channels.to_le_bytes());
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&block_align.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());

        for sample in self.samples.iter() {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            out.extend_from_slice(&value.to_le_bytes());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_counts_frames_not_samples() {
        let clip = AudioClip::new(vec![0.0; 48_000 * 2], 48_000, 2);
        assert_eq!(clip.duration(), Duration::from_secs(1));

        let mono = AudioClip::new(vec![0.0; 24_000], 48_000, 1);
        assert_eq!(mono.duration(), Duration::from_millis(500));
    }

    #[test]
    fn empty_clip_has_zero_duration() {
        let clip = AudioClip::new(Vec::new(), 48_000, 1);
        assert!(clip.is_empty());
        assert_eq!(clip.duration(), Duration::ZERO);
    }

    #[test]
    fn wav_header_describes_the_clip() {
        let clip = AudioClip::new(vec![0.0, 0.5, -0.5, 1.0], 44_100, 2);
        let bytes = clip.to_wav_bytes();

        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        // channels
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 2);
        // sample rate
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            44_100
        );
        // bits per sample
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
        // data chunk: 4 samples * 2 bytes
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(
            u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
            8
        );
        assert_eq!(bytes.len(), 44 + 8);
    }

    #[test]
    fn samples_are_clamped_into_pcm_range() {
        let clip = AudioClip::new(vec![2.0, -2.0], 8_000, 1);
        let bytes = clip.to_wav_bytes();
        let first = i16::from_le_bytes([bytes[44], bytes[45]]);
        let second = i16::from_le_bytes([bytes[46], bytes[47]]);
        assert_eq!(first, i16::MAX);
        assert_eq!(second, -i16::MAX);
    }
}

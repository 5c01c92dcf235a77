use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::audio::{clip::AudioClip, error::AudioError};

/// Keeps the output device open for the lifetime of the app. Each play of a
/// recorded clip gets its own transient [`ClipPlayback`].
pub struct PlaybackEngine {
    stream: OutputStream,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::OutputDevice(e.to_string()))?;
        Ok(Self { stream })
    }

    /// Starts the clip from the beginning on a fresh sink.
    pub fn play_clip(&self, clip: &AudioClip) -> ClipPlayback {
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(clip.source());
        ClipPlayback { sink }
    }
}

/// The handle for one play of a clip. Dropping it stops the sink and
/// releases the decoded source, so a superseded or finished play never
/// outlives its cycle.
pub struct ClipPlayback {
    sink: Sink,
}

impl ClipPlayback {
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

impl Drop for ClipPlayback {
    fn drop(&mut self) {
        self.sink.stop();
    }
}

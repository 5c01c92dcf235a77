use crate::audio::{
    capture::CaptureSession,
    clip::AudioClip,
    error::AudioError,
    playback::{ClipPlayback, PlaybackEngine},
};

/// Recorder lifecycle as a tagged variant. The capture session, the finished
/// clip and the playback handle live inside the states that own them, so
/// combinations like "playing while recording" cannot be expressed.
pub enum RecorderState {
    Idle,
    Recording {
        session: CaptureSession,
        elapsed_secs: u64,
    },
    Ready {
        clip: AudioClip,
        playback: Option<ClipPlayback>,
        elapsed_secs: u64,
    },
}

pub struct Recorder {
    state: RecorderState,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            state: RecorderState::Idle,
        }
    }

    /// Opens the microphone and enters `Recording` with the elapsed counter
    /// back at zero. A previous clip (and any playback of it) is discarded.
    /// On device failure the current state is kept and the error returned
    /// for the caller to log.
    pub fn start(&mut self) -> Result<(), AudioError> {
        if matches!(self.state, RecorderState::Recording { .. }) {
            return Ok(());
        }
        let session = CaptureSession::open()?;
        self.state = RecorderState::Recording {
            session,
            elapsed_secs: 0,
        };
        Ok(())
    }

    /// Finalizes the buffered chunks into one clip, releases the input
    /// device and stops counting. Returns the clip to report upward.
    pub fn stop(&mut self) -> Option<AudioClip> {
        match std::mem::replace(&mut self.state, RecorderState::Idle) {
            RecorderState::Recording {
                session,
                elapsed_secs,
            } => {
                let clip = session.finish();
                self.state = RecorderState::Ready {
                    clip: clip.clone(),
                    playback: None,
                    elapsed_secs,
                };
                Some(clip)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// One second of recording time passed.
    pub fn tick(&mut self) {
        if let RecorderState::Recording { elapsed_secs, .. } = &mut self.state {
            *elapsed_secs += 1;
        }
    }

    /// Plays the finished clip from the start, superseding any playback
    /// still holding a sink.
    pub fn play(&mut self, engine: &PlaybackEngine) {
        if let RecorderState::Ready { clip, playback, .. } = &mut self.state {
            *playback = Some(engine.play_clip(clip));
        }
    }

    /// Ends the current play cycle and releases its handle.
    pub fn pause(&mut self) {
        if let RecorderState::Ready { playback, .. } = &mut self.state {
            *playback = None;
        }
    }

    /// Drops the playback handle once the sink has drained. Call on every
    /// UI tick; returns true when playback just ended.
    pub fn poll_playback(&mut self) -> bool {
        if let RecorderState::Ready { playback, .. } = &mut self.state {
            if playback.as_ref().is_some_and(|p| p.is_finished()) {
                *playback = None;
                return true;
            }
        }
        false
    }

    /// Discards the finished clip; the widget becomes indistinguishable from
    /// one that never recorded. Returns true when there was a clip to clear.
    pub fn clear(&mut self) -> bool {
        if matches!(self.state, RecorderState::Ready { .. }) {
            self.state = RecorderState::Idle;
            true
        } else {
            false
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    pub fn is_playing(&self) -> bool {
        matches!(
            &self.state,
            RecorderState::Ready {
                playback: Some(playback),
                ..
            } if !playback.is_finished()
        )
    }

    pub fn clip(&self) -> Option<&AudioClip> {
        match &self.state {
            RecorderState::Ready { clip, .. } => Some(clip),
            _ => None,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        match &self.state {
            RecorderState::Idle => 0,
            RecorderState::Recording { elapsed_secs, .. }
            | RecorderState::Ready { elapsed_secs, .. } => *elapsed_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_recorder(elapsed_secs: u64) -> Recorder {
        Recorder {
            state: RecorderState::Ready {
                clip: AudioClip::new(vec![0.0; 16], 48_000, 1),
                playback: None,
                elapsed_secs,
            },
        }
    }

    #[test]
    fn idle_recorder_reports_nothing() {
        let recorder = Recorder::new();
        assert!(!recorder.is_recording());
        assert!(!recorder.is_playing());
        assert!(recorder.clip().is_none());
        assert_eq!(recorder.elapsed_secs(), 0);
    }

    #[test]
    fn stop_outside_recording_is_a_no_op() {
        let mut recorder = Recorder::new();
        assert!(recorder.stop().is_none());

        let mut recorder = ready_recorder(3);
        assert!(recorder.stop().is_none());
        assert_eq!(recorder.elapsed_secs(), 3);
    }

    #[test]
    fn ticks_only_count_while_recording() {
        let mut recorder = Recorder::new();
        recorder.tick();
        assert_eq!(recorder.elapsed_secs(), 0);

        let mut recorder = ready_recorder(5);
        recorder.tick();
        assert_eq!(recorder.elapsed_secs(), 5);
    }

    #[test]
    fn clear_returns_to_a_pristine_idle() {
        let mut recorder = ready_recorder(12);
        assert!(recorder.clear());
        assert!(recorder.clip().is_none());
        assert!(!recorder.is_playing());
        assert_eq!(recorder.elapsed_secs(), 0);

        // Clearing twice changes nothing.
        assert!(!recorder.clear());
    }

    #[test]
    fn ready_without_playback_is_not_playing() {
        let recorder = ready_recorder(1);
        assert!(!recorder.is_playing());
        assert!(recorder.clip().is_some());
    }

    #[test]
    fn poll_without_playback_reports_no_change() {
        let mut recorder = ready_recorder(1);
        assert!(!recorder.poll_playback());
        let mut idle = Recorder::new();
        assert!(!idle.poll_playback());
    }
}

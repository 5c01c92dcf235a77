use std::{path::PathBuf, time::Duration};

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::form::state::FormState;

/// Fixed file name under which a recorded clip travels in the payload.
pub const RECORDED_AUDIO_FILE_NAME: &str = "recording.wav";

/// Artificial round-trip standing in for the generation service call.
pub const SUBMIT_ROUND_TRIP: Duration = Duration::from_secs(2);

#[derive(Error, Debug, Clone)]
pub enum SubmitError {
    #[error("An error occurred while sending your request. Please try again.")]
    RequestFailed(String),
}

#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub request_id: Uuid,
}

#[derive(Debug, Clone)]
pub enum PartBody {
    Text(String),
    Bytes(Vec<u8>),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Part {
    pub name: &'static str,
    pub file_name: Option<String>,
    pub body: PartBody,
}

/// The multipart-shaped request body. Nothing is sent anywhere; this is the
/// documented wire shape a real deployment would POST.
#[derive(Debug, Clone, Default)]
pub struct RequestPayload {
    pub parts: Vec<Part>,
}

impl RequestPayload {
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }
}

pub fn build_payload(form: &FormState) -> RequestPayload {
    let mut parts = vec![
        Part {
            name: "lyrics",
            file_name: None,
            body: PartBody::Text(form.lyrics.clone()),
        },
        Part {
            name: "exclusions",
            file_name: None,
            body: PartBody::Text(form.exclusions.clone()),
        },
        Part {
            name: "genre",
            file_name: None,
            body: PartBody::Text(form.genre.clone()),
        },
        Part {
            name: "subgenre",
            file_name: None,
            body: PartBody::Text(form.subgenre.clone()),
        },
    ];

    if let Some(file) = &form.audio_file {
        parts.push(Part {
            name: "audioFile",
            file_name: Some(file.name.clone()),
            body: PartBody::File(file.path.clone()),
        });
    }

    if let Some(clip) = &form.recorded_audio {
        parts.push(Part {
            name: "recordedAudio",
            file_name: Some(RECORDED_AUDIO_FILE_NAME.to_string()),
            body: PartBody::Bytes(clip.to_wav_bytes()),
        });
    }

    RequestPayload { parts }
}

/// Simulated submission: logs the attempt, waits out the artificial
/// round-trip and reports success. A real deployment would POST `payload`
/// as `multipart/form-data` to the generation service instead.
pub async fn submit(payload: RequestPayload) -> Result<SubmitReceipt, SubmitError> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        parts = payload.parts.len(),
        "submitting music creation request"
    );

    tokio::time::sleep(SUBMIT_ROUND_TRIP).await;

    info!(%request_id, "music creation request accepted");
    Ok(SubmitReceipt { request_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::clip::AudioClip,
        event::events::FormEvent,
        form::upload::AudioFile,
    };

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.apply(FormEvent::GenreSelected("pop".into()));
        form.apply(FormEvent::SubgenreSelected("Indie Pop".into()));
        form.apply(FormEvent::LyricsChanged("Verse 1...".into()));
        form.apply(FormEvent::ExclusionsChanged("no brass".into()));
        form
    }

    #[test]
    fn text_fields_come_first_in_order() {
        let payload = build_payload(&filled_form());
        let names: Vec<_> = payload.parts.iter().map(|p| p.name).collect();
        assert_eq!(names, ["lyrics", "exclusions", "genre", "subgenre"]);
    }

    #[test]
    fn audio_parts_are_omitted_when_absent() {
        let payload = build_payload(&filled_form());
        assert!(payload.part("audioFile").is_none());
        assert!(payload.part("recordedAudio").is_none());
    }

    #[test]
    fn uploaded_file_keeps_its_own_name() {
        let mut form = filled_form();
        form.apply(FormEvent::FileSelected(AudioFile {
            path: PathBuf::from("/music/demo.mp3"),
            name: "demo.mp3".into(),
            size: 123,
        }));

        let payload = build_payload(&form);
        let part = payload.part("audioFile").unwrap();
        assert_eq!(part.file_name.as_deref(), Some("demo.mp3"));
        assert!(matches!(&part.body, PartBody::File(p) if p.ends_with("demo.mp3")));
    }

    #[test]
    fn recorded_clip_travels_under_the_fixed_name() {
        let mut form = filled_form();
        form.apply(FormEvent::RecordingFinished(AudioClip::new(
            vec![0.0; 32],
            48_000,
            1,
        )));

        let payload = build_payload(&form);
        let part = payload.part("recordedAudio").unwrap();
        assert_eq!(part.file_name.as_deref(), Some("recording.wav"));
        match &part.body {
            PartBody::Bytes(bytes) => assert_eq!(&bytes[..4], b"RIFF"),
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_succeeds() {
        let receipt = submit(build_payload(&filled_form())).await.unwrap();
        assert!(!receipt.request_id.is_nil());
    }
}

use crate::{
    audio::clip::AudioClip,
    form::{
        submit::{SubmitError, SubmitReceipt},
        upload::{AudioFile, UploadError},
    },
};

/// Events delivered through the application channel by background tasks.
#[derive(Debug, Clone)]
pub enum Event {
    RecordingTick,
    SubmitFinished(Result<SubmitReceipt, SubmitError>),
    NoticeExpired,
}

/// Notifications emitted by form sections and applied by the form view's
/// reducer. Sections never touch [`FormState`](crate::form::state::FormState)
/// directly.
#[derive(Debug, Clone)]
pub enum FormEvent {
    FileSelected(AudioFile),
    FileCleared,
    UploadRejected(UploadError),
    RecordingFinished(AudioClip),
    RecordingCleared,
    GenreSelected(String),
    SubgenreSelected(String),
    LyricsChanged(String),
    ExclusionsChanged(String),
}

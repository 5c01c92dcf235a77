use crate::{
    audio::clip::AudioClip,
    event::events::FormEvent,
    form::{catalog, upload::AudioFile},
};

/// All user-entered values for one submission attempt. Owned by the form
/// view; mutated only through [`apply`](FormState::apply); replaced with
/// `FormState::default()` after a successful submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub audio_file: Option<AudioFile>,
    pub recorded_audio: Option<AudioClip>,
    pub lyrics: String,
    pub exclusions: String,
    pub genre: String,
    pub subgenre: String,
}

impl FormState {
    /// The reducer: folds a section notification into the form. Selecting a
    /// genre always clears the subgenre, and a subgenre is only accepted
    /// from the current genre's catalog entry.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::FileSelected(file) => self.audio_file = Some(file),
            FormEvent::FileCleared => self.audio_file = None,
            FormEvent::RecordingFinished(clip) => self.recorded_audio = Some(clip),
            FormEvent::RecordingCleared => self.recorded_audio = None,
            FormEvent::GenreSelected(genre) => {
                self.genre = genre;
                self.subgenre.clear();
            }
            FormEvent::SubgenreSelected(subgenre) => {
                if catalog::subgenres(&self.genre).contains(&subgenre.as_str()) {
                    self.subgenre = subgenre;
                }
            }
            FormEvent::LyricsChanged(lyrics) => self.lyrics = lyrics,
            FormEvent::ExclusionsChanged(exclusions) => self.exclusions = exclusions,
            // Handled by the form view, not the state.
            FormEvent::UploadRejected(_) => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.audio_file.is_none()
            && self.recorded_audio.is_none()
            && self.lyrics.is_empty()
            && self.exclusions.is_empty()
            && self.genre.is_empty()
            && self.subgenre.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_genre_clears_the_subgenre() {
        let mut form = FormState::default();
        form.apply(FormEvent::GenreSelected("pop".into()));
        form.apply(FormEvent::SubgenreSelected("Indie Pop".into()));
        assert_eq!(form.subgenre, "Indie Pop");

        form.apply(FormEvent::GenreSelected("rock".into()));
        assert_eq!(form.genre, "rock");
        assert_eq!(form.subgenre, "");
    }

    #[test]
    fn subgenre_must_come_from_the_selected_genres_list() {
        let mut form = FormState::default();
        form.apply(FormEvent::GenreSelected("jazz".into()));
        form.apply(FormEvent::SubgenreSelected("Indie Pop".into()));
        assert_eq!(form.subgenre, "");

        form.apply(FormEvent::SubgenreSelected("Bebop".into()));
        assert_eq!(form.subgenre, "Bebop");
    }

    #[test]
    fn subgenre_is_rejected_with_no_genre_selected() {
        let mut form = FormState::default();
        form.apply(FormEvent::SubgenreSelected("Bebop".into()));
        assert_eq!(form.subgenre, "");
    }

    #[test]
    fn recording_events_set_and_clear_the_clip() {
        let mut form = FormState::default();
        let clip = AudioClip::new(vec![0.0; 4], 48_000, 1);
        form.apply(FormEvent::RecordingFinished(clip));
        assert!(form.recorded_audio.is_some());

        form.apply(FormEvent::RecordingCleared);
        assert!(form.recorded_audio.is_none());
    }

    #[test]
    fn default_state_is_empty() {
        assert!(FormState::default().is_empty());

        let mut form = FormState::default();
        form.apply(FormEvent::LyricsChanged("la la".into()));
        assert!(!form.is_empty());
    }
}

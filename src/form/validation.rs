use thiserror::Error;

use crate::form::state::FormState;

/// One variant per required field, checked in presentation order. Audio
/// attachments are optional and never block submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a musical genre.")]
    MissingGenre,

    #[error("Please select a subgenre.")]
    MissingSubgenre,

    #[error("Please enter the song lyrics.")]
    MissingLyrics,
}

pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    if form.genre.is_empty() {
        return Err(ValidationError::MissingGenre);
    }
    if form.subgenre.is_empty() {
        return Err(ValidationError::MissingSubgenre);
    }
    if form.lyrics.trim().is_empty() {
        return Err(ValidationError::MissingLyrics);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::events::FormEvent;

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.apply(FormEvent::GenreSelected("pop".into()));
        form.apply(FormEvent::SubgenreSelected("Indie Pop".into()));
        form.apply(FormEvent::LyricsChanged("Verse 1...".into()));
        form
    }

    #[test]
    fn empty_genre_fails_first() {
        let mut form = filled_form();
        form.genre.clear();
        form.subgenre.clear();
        form.lyrics.clear();
        assert_eq!(validate(&form), Err(ValidationError::MissingGenre));
    }

    #[test]
    fn genre_without_subgenre_fails_on_subgenre() {
        let mut form = filled_form();
        form.subgenre.clear();
        form.lyrics.clear();
        assert_eq!(validate(&form), Err(ValidationError::MissingSubgenre));
    }

    #[test]
    fn whitespace_only_lyrics_fail() {
        let mut form = filled_form();
        form.lyrics = "  \n\t ".into();
        assert_eq!(validate(&form), Err(ValidationError::MissingLyrics));
    }

    #[test]
    fn complete_form_passes_without_audio() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn messages_are_distinct() {
        let messages = [
            ValidationError::MissingGenre.to_string(),
            ValidationError::MissingSubgenre.to_string(),
            ValidationError::MissingLyrics.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }
}

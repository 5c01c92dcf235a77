#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    Upload,
    Recorder,
    Lyrics,
    Exclusions,
    Genre,
    Submit,
}

impl SectionId {
    const ORDER: [SectionId; 6] = [
        SectionId::Upload,
        SectionId::Recorder,
        SectionId::Lyrics,
        SectionId::Exclusions,
        SectionId::Genre,
        SectionId::Submit,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast shown in the footer until dismissed or expired.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: SectionId,
    pub is_submitting: bool,
    pub notice: Option<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_section_and_wraps() {
        let mut focus = SectionId::Upload;
        for expected in [
            SectionId::Recorder,
            SectionId::Lyrics,
            SectionId::Exclusions,
            SectionId::Genre,
            SectionId::Submit,
            SectionId::Upload,
        ] {
            focus = focus.next();
            assert_eq!(focus, expected);
        }
    }

    #[test]
    fn previous_is_the_inverse_of_next() {
        for section in SectionId::ORDER {
            assert_eq!(section.next().previous(), section);
        }
    }
}

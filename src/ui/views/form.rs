use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::info;

use crate::{
    event::events::{Event, FormEvent},
    form::{
        state::FormState,
        submit::{SubmitError, SubmitReceipt, build_payload, submit},
        upload::UploadPolicy,
        validation::validate,
    },
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        sections::{GenreSection, RecorderSection, TextKind, TextSection, UploadSection},
        state::{Notice, SectionId, UiState},
        traits::Section,
    },
    util::colors,
};

const SUBMIT_TASK: &str = "submit";
const NOTICE_TASK: &str = "notice";
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// The creation form. Owns the canonical [`FormState`]; sections report
/// edits as [`FormEvent`]s and the reducer here is the only writer.
pub struct FormView {
    form: FormState,
    ui: UiState,
    upload: UploadSection,
    recorder: RecorderSection,
    lyrics: TextSection,
    exclusions: TextSection,
    genre: GenreSection,
}

impl FormView {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            ui: UiState::default(),
            upload: UploadSection::new(UploadPolicy::default()),
            recorder: RecorderSection::new(),
            lyrics: TextSection::new(TextKind::Lyrics),
            exclusions: TextSection::new(TextKind::Exclusions),
            genre: GenreSection::new(),
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.ui.notice.as_ref()
    }

    pub fn focus_next(&mut self) {
        self.ui.focus = self.ui.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.ui.focus = self.ui.focus.previous();
    }

    pub fn dismiss_notice(&mut self) {
        self.ui.notice = None;
    }

    fn sections(&mut self) -> [&mut dyn Section; 5] {
        [
            &mut self.upload,
            &mut self.recorder,
            &mut self.lyrics,
            &mut self.exclusions,
            &mut self.genre,
        ]
    }

    /// Routes a key to the focused section; returns whether it was used.
    pub fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> bool {
        if self.ui.focus == SectionId::Submit {
            if key.code == KeyCode::Enter {
                self.request_submit(ctx);
                return true;
            }
            return false;
        }

        let event = match self.ui.focus {
            SectionId::Upload => self.upload.handle_key(key, &self.form, ctx),
            SectionId::Recorder => self.recorder.handle_key(key, &self.form, ctx),
            SectionId::Lyrics => self.lyrics.handle_key(key, &self.form, ctx),
            SectionId::Exclusions => self.exclusions.handle_key(key, &self.form, ctx),
            SectionId::Genre => self.genre.handle_key(key, &self.form, ctx),
            SectionId::Submit => None,
        };
        match event {
            Some(event) => {
                self.apply(event, ctx);
                true
            }
            None => false,
        }
    }

    /// The terminal's drop gesture: pasted text goes to the focused section.
    pub fn handle_paste(&mut self, text: &str, ctx: &mut AppContext) {
        let event = match self.ui.focus {
            SectionId::Upload => self.upload.on_paste(text, &self.form, ctx),
            SectionId::Recorder => self.recorder.on_paste(text, &self.form, ctx),
            SectionId::Lyrics => self.lyrics.on_paste(text, &self.form, ctx),
            SectionId::Exclusions => self.exclusions.on_paste(text, &self.form, ctx),
            SectionId::Genre => self.genre.on_paste(text, &self.form, ctx),
            SectionId::Submit => None,
        };
        if let Some(event) = event {
            self.apply(event, ctx);
        }
    }

    /// UI-tick housekeeping: notices playback running out.
    pub fn poll(&mut self, _ctx: &mut AppContext) {
        self.recorder.poll();
    }

    pub fn on_event(&mut self, event: &Event, ctx: &mut AppContext) {
        for section in self.sections() {
            section.on_event(event, ctx);
        }

        match event {
            Event::SubmitFinished(result) => self.finish_submit(result.clone(), ctx),
            Event::NoticeExpired => self.ui.notice = None,
            Event::RecordingTick => {}
        }
    }

    fn apply(&mut self, event: FormEvent, ctx: &mut AppContext) {
        match event {
            FormEvent::UploadRejected(error) => {
                self.show_notice(Notice::error("Upload rejected", error.to_string()), ctx);
            }
            other => self.form.apply(other),
        }
    }

    /// Validates and, if the form passes, kicks off the simulated
    /// submission. The submitting flag keeps a second submission from
    /// starting while one is in flight.
    pub fn request_submit(&mut self, ctx: &mut AppContext) {
        if self.ui.is_submitting {
            return;
        }

        if let Err(error) = validate(&self.form) {
            self.show_notice(Notice::error("Validation error", error.to_string()), ctx);
            return;
        }

        self.ui.is_submitting = true;
        let payload = build_payload(&self.form);
        let tx = ctx.event_tx.clone();
        ctx.tasks.spawn(
            SUBMIT_TASK,
            tokio::spawn(async move {
                let result = submit(payload).await;
                let _ = tx.send(Event::SubmitFinished(result));
            }),
        );
    }

    fn finish_submit(
        &mut self,
        result: Result<SubmitReceipt, SubmitError>,
        ctx: &mut AppContext,
    ) {
        self.ui.is_submitting = false;
        match result {
            Ok(receipt) => {
                info!(request_id = %receipt.request_id, "submission confirmed");
                self.form = FormState::default();
                for section in self.sections() {
                    section.reset();
                }
                self.show_notice(
                    Notice::success("Success!", "Your music creation request was sent."),
                    ctx,
                );
            }
            Err(error) => {
                // Form state stays as typed so the user can retry.
                self.show_notice(Notice::error("Error", error.to_string()), ctx);
            }
        }
    }

    fn show_notice(&mut self, notice: Notice, ctx: &mut AppContext) {
        self.ui.notice = Some(notice);
        let tx = ctx.event_tx.clone();
        ctx.tasks.spawn(
            NOTICE_TASK,
            tokio::spawn(async move {
                tokio::time::sleep(NOTICE_TTL).await;
                let _ = tx.send(Event::NoticeExpired);
            }),
        );
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let focus = self.ui.focus;

        let heights = [
            self.upload.height(&self.form),
            self.recorder.height(&self.form),
            self.lyrics.height(&self.form),
            self.exclusions.height(&self.form),
            self.genre.height(&self.form),
        ];

        let mut constraints: Vec<Constraint> =
            heights.iter().map(|h| Constraint::Length(*h)).collect();
        constraints.push(Constraint::Length(3)); // submit row
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.upload
            .render(f, chunks[0], &self.form, focus == SectionId::Upload);
        self.recorder
            .render(f, chunks[1], &self.form, focus == SectionId::Recorder);
        self.lyrics
            .render(f, chunks[2], &self.form, focus == SectionId::Lyrics);
        self.exclusions
            .render(f, chunks[3], &self.form, focus == SectionId::Exclusions);
        self.genre
            .render(f, chunks[4], &self.form, focus == SectionId::Genre);

        self.render_submit_row(f, chunks[5], focus == SectionId::Submit);
    }

    fn render_submit_row(&self, f: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.ui.is_submitting {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Processing...");
            f.render_widget(spinner, inner);
        } else {
            let label = Paragraph::new(Line::styled(
                "➤ Create my music",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered();
            f.render_widget(label, inner);
        }
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

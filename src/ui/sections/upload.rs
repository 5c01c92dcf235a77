use std::path::Path;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    event::events::FormEvent,
    form::{state::FormState, upload::UploadPolicy},
    ui::{context::AppContext, traits::Section},
    util::{colors, format::format_file_size},
};

/// Base-audio upload. With no selection it shows a drop zone (pasting a
/// path is the drop gesture) plus a path input; with a selection, a card
/// with the file name and size and a remove action.
pub struct UploadSection {
    policy: UploadPolicy,
    input: String,
}

impl UploadSection {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            input: String::new(),
        }
    }

    /// Validation is identical for typed and dropped paths; on rejection
    /// the previous selection (if any) stays untouched.
    fn select_path(&mut self, raw: &str) -> Option<FormEvent> {
        let trimmed = raw.trim().trim_matches(|c| c == '\'' || c == '"');
        if trimmed.is_empty() {
            return None;
        }
        match self.policy.check(Path::new(trimmed)) {
            Ok(file) => {
                self.input.clear();
                Some(FormEvent::FileSelected(file))
            }
            Err(error) => Some(FormEvent::UploadRejected(error)),
        }
    }
}

impl Section for UploadSection {
    fn render(&mut self, f: &mut Frame, area: Rect, form: &FormState, focused: bool) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("1. Base audio (optional)")
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        match &form.audio_file {
            Some(file) => {
                let mut name = file.name.clone();
                let max_width = inner.width.saturating_sub(4) as usize;
                while UnicodeWidthStr::width(name.as_str()) > max_width && !name.is_empty() {
                    name.pop();
                }

                let card = Paragraph::new(vec![
                    Line::from(vec![
                        Span::styled("♪ ", Style::default().fg(colors::PRIMARY)),
                        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(
                            format!("  {}", format_file_size(file.size)),
                            Style::default().fg(colors::NEUTRAL),
                        ),
                    ]),
                    Line::styled("[x] remove", Style::default().fg(colors::DANGER)),
                ]);
                f.render_widget(card, inner);
            }
            None => {
                let input_line = if self.input.is_empty() {
                    Line::styled(
                        "type a path, or drop a file onto the terminal",
                        Style::default().fg(colors::NEUTRAL),
                    )
                } else {
                    Line::from(vec![
                        Span::raw(self.input.clone()),
                        Span::styled("█", Style::default().fg(colors::PRIMARY)),
                    ])
                };

                let zone = Paragraph::new(vec![
                    input_line,
                    Line::styled(
                        format!(
                            "accepted: {} · max {}",
                            self.policy.accepted_list(),
                            format_file_size(self.policy.max_size())
                        ),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]);
                f.render_widget(zone, inner);
            }
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        form: &FormState,
        _ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        if form.audio_file.is_some() {
            return match key.code {
                KeyCode::Char('x') | KeyCode::Delete => Some(FormEvent::FileCleared),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Enter => {
                let raw = self.input.clone();
                self.select_path(&raw)
            }
            _ => None,
        }
    }

    fn on_paste(
        &mut self,
        text: &str,
        _form: &FormState,
        _ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        self.select_path(text)
    }

    fn reset(&mut self) {
        self.input.clear();
    }

    fn height(&self, _form: &FormState) -> u16 {
        4
    }
}

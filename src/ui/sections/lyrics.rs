use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    event::events::FormEvent,
    form::state::FormState,
    ui::{context::AppContext, traits::Section},
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Lyrics,
    Exclusions,
}

impl TextKind {
    fn title(self) -> &'static str {
        match self {
            TextKind::Lyrics => "3. Lyrics *",
            TextKind::Exclusions => "4. Elements to exclude (optional)",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            TextKind::Lyrics => "Write the full lyrics of your song here...",
            TextKind::Exclusions => {
                "Describe instruments or styles you do NOT want in your song..."
            }
        }
    }

    fn value(self, form: &FormState) -> &str {
        match self {
            TextKind::Lyrics => &form.lyrics,
            TextKind::Exclusions => &form.exclusions,
        }
    }

    fn changed(self, value: String) -> FormEvent {
        match self {
            TextKind::Lyrics => FormEvent::LyricsChanged(value),
            TextKind::Exclusions => FormEvent::ExclusionsChanged(value),
        }
    }
}

/// Free-text entry. The section never stores the text itself; it derives
/// each edit from the form value and reports the new string upward, so the
/// form stays the single source of truth.
pub struct TextSection {
    kind: TextKind,
}

impl TextSection {
    pub fn new(kind: TextKind) -> Self {
        Self { kind }
    }
}

impl Section for TextSection {
    fn render(&mut self, f: &mut Frame, area: Rect, form: &FormState, focused: bool) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.kind.title())
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let value = self.kind.value(form);
        if value.is_empty() {
            let hint = Paragraph::new(self.kind.placeholder())
                .style(Style::default().fg(colors::NEUTRAL));
            f.render_widget(hint, inner);
            return;
        }

        // Tail of the text, last lines first truncated to what fits.
        let visible = inner.height as usize;
        let mut lines: Vec<Line> = value
            .lines()
            .rev()
            .take(visible.max(1))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|l| {
                let mut line = l.to_string();
                let max = inner.width.saturating_sub(1) as usize;
                while UnicodeWidthStr::width(line.as_str()) > max && !line.is_empty() {
                    line.pop();
                }
                Line::raw(line)
            })
            .collect();
        if value.ends_with('\n') {
            lines.push(Line::raw(""));
        }
        if focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("█", Style::default().fg(colors::PRIMARY)));
            }
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        form: &FormState,
        _ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        edit(self.kind.value(form), key).map(|value| self.kind.changed(value))
    }

    fn on_paste(
        &mut self,
        text: &str,
        form: &FormState,
        _ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        let mut value = self.kind.value(form).to_string();
        value.push_str(text);
        Some(self.kind.changed(value))
    }

    fn height(&self, _form: &FormState) -> u16 {
        match self.kind {
            TextKind::Lyrics => 8,
            TextKind::Exclusions => 5,
        }
    }
}

/// The grown/shrunk string after one keystroke, or `None` when the key does
/// not edit.
fn edit(value: &str, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) => {
            let mut value = value.to_string();
            value.push(c);
            Some(value)
        }
        KeyCode::Enter => {
            let mut value = value.to_string();
            value.push('\n');
            Some(value)
        }
        KeyCode::Backspace => {
            if value.is_empty() {
                return None;
            }
            let mut value = value.to_string();
            value.pop();
            Some(value)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_grows_the_string() {
        assert_eq!(edit("ab", key(KeyCode::Char('c'))).as_deref(), Some("abc"));
    }

    #[test]
    fn enter_appends_a_newline() {
        assert_eq!(
            edit("Verse 1", key(KeyCode::Enter)).as_deref(),
            Some("Verse 1\n")
        );
    }

    #[test]
    fn backspace_shrinks_or_does_nothing() {
        assert_eq!(edit("abc", key(KeyCode::Backspace)).as_deref(), Some("ab"));
        assert!(edit("", key(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn navigation_keys_do_not_edit() {
        assert!(edit("abc", key(KeyCode::Up)).is_none());
        assert!(edit("abc", key(KeyCode::Tab)).is_none());
    }

    #[test]
    fn kinds_report_through_their_own_event() {
        assert!(matches!(
            TextKind::Lyrics.changed("la la".into()),
            FormEvent::LyricsChanged(v) if v == "la la"
        ));
        assert!(matches!(
            TextKind::Exclusions.changed("no brass".into()),
            FormEvent::ExclusionsChanged(v) if v == "no brass"
        ));
    }
}

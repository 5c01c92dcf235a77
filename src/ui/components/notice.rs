use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    ui::state::{Notice, NoticeKind},
    util::colors,
};

/// One-line toast: `✔ Title  body`, colored by kind. Rendered in the footer
/// until the auto-dismiss task fires or the user presses Esc.
pub struct NoticeBar<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeBar<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (symbol, color) = match self.notice.kind {
            NoticeKind::Success => ("✔", colors::SUCCESS),
            NoticeKind::Error => ("✘", colors::DANGER),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {symbol} {} ", self.notice.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.notice.body.clone(), Style::default().fg(color)),
        ]);

        if area.width > 0 && area.height > 0 {
            buf.set_line(area.x, area.y, &line, area.width);
        }
    }
}

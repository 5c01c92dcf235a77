use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{app::App, components::notice::NoticeBar},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(area);

        let header_area = chunks[0];
        let body_area = chunks[1];
        let footer_area = chunks[2];

        let header = Paragraph::new(vec![
            Line::styled(
                "♫ musedraft",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Upload audio, record a melody or just describe your vision.",
                Style::default().fg(colors::NEUTRAL),
            ),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, header_area);

        let body_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("Music Creation Form")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(colors::SECONDARY));
        let body_inner = body_block.inner(body_area);
        f.render_widget(body_block, body_area);

        self.app.view.render(f, body_inner);

        let hints = Paragraph::new(Line::styled(
            "Tab next · Shift+Tab previous · Ctrl+S submit · Ctrl+C quit",
            Style::default().fg(colors::NEUTRAL),
        ))
        .alignment(Alignment::Center);
        f.render_widget(hints, footer_area);

        if let Some(notice) = self.app.view.notice() {
            f.render_widget(
                NoticeBar::new(notice),
                Rect {
                    x: footer_area.x,
                    y: footer_area.y + footer_area.height.saturating_sub(1),
                    width: footer_area.width,
                    height: 1,
                },
            );
        }
    }
}

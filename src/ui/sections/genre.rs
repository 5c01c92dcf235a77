use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    event::events::FormEvent,
    form::{catalog, state::FormState},
    ui::{
        components::select::{SelectItem, SelectList, SelectOutcome},
        context::AppContext,
        traits::Section,
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropdownKind {
    Genre,
    Subgenre,
}

/// Two dependent dropdowns over the static catalog. The subgenre row only
/// exists once a genre is chosen; picking a new genre clears the subgenre
/// through the reducer.
pub struct GenreSection {
    row: DropdownKind,
    open: Option<(DropdownKind, SelectList)>,
}

impl GenreSection {
    pub fn new() -> Self {
        Self {
            row: DropdownKind::Genre,
            open: None,
        }
    }

    fn open_dropdown(&mut self, kind: DropdownKind, form: &FormState) {
        let items: Vec<SelectItem> = match kind {
            DropdownKind::Genre => catalog::genres()
                .map(|g| SelectItem::new(g, catalog::display_label(g)))
                .collect(),
            DropdownKind::Subgenre => catalog::subgenres(&form.genre)
                .iter()
                .map(|s| SelectItem::new(*s, *s))
                .collect(),
        };
        if items.is_empty() {
            return;
        }
        let title = match kind {
            DropdownKind::Genre => "Select a genre",
            DropdownKind::Subgenre => "Select a subgenre",
        };
        self.open = Some((kind, SelectList::new(title, items)));
    }

    fn row_line(label: &str, value: &str, placeholder: &str, active: bool) -> Line<'static> {
        let marker = if active { "› " } else { "  " };
        let value_span = if value.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(colors::NEUTRAL))
        } else {
            Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )
        };
        Line::from(vec![
            Span::styled(
                format!("{marker}{label:<10}"),
                Style::default().fg(if active {
                    colors::PRIMARY
                } else {
                    colors::NEUTRAL
                }),
            ),
            Span::raw("▾ "),
            value_span,
        ])
    }
}

impl Default for GenreSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for GenreSection {
    fn render(&mut self, f: &mut Frame, area: Rect, form: &FormState, focused: bool) {
        if !focused {
            self.open = None;
        }

        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("5. Musical genre *")
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let genre_active = focused && self.row == DropdownKind::Genre && self.open.is_none();
        let subgenre_active =
            focused && self.row == DropdownKind::Subgenre && self.open.is_none();

        let mut lines = vec![Self::row_line(
            "Genre",
            &catalog::display_label(&form.genre),
            "select a genre",
            genre_active,
        )];
        if !form.genre.is_empty() {
            lines.push(Self::row_line(
                "Subgenre",
                &form.subgenre,
                "select a subgenre",
                subgenre_active,
            ));
        }
        f.render_widget(Paragraph::new(lines), rows[0]);

        if let Some((_, select)) = &mut self.open {
            let height = select.desired_height().min(rows[1].height);
            let popup = Rect {
                x: rows[1].x,
                y: rows[1].y,
                width: rows[1].width.min(40),
                height,
            };
            select.render(f, popup);
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        form: &FormState,
        _ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        if let Some((kind, select)) = &mut self.open {
            let kind = *kind;
            return match select.handle_key(key) {
                SelectOutcome::Pending => None,
                SelectOutcome::Closed => {
                    self.open = None;
                    None
                }
                SelectOutcome::Picked(value) => {
                    self.open = None;
                    match kind {
                        DropdownKind::Genre => {
                            self.row = DropdownKind::Subgenre;
                            Some(FormEvent::GenreSelected(value))
                        }
                        DropdownKind::Subgenre => Some(FormEvent::SubgenreSelected(value)),
                    }
                }
            };
        }

        match key.code {
            KeyCode::Up => {
                self.row = DropdownKind::Genre;
                None
            }
            KeyCode::Down => {
                if !form.genre.is_empty() {
                    self.row = DropdownKind::Subgenre;
                }
                None
            }
            KeyCode::Enter => {
                let kind = if self.row == DropdownKind::Subgenre && !form.genre.is_empty() {
                    DropdownKind::Subgenre
                } else {
                    DropdownKind::Genre
                };
                self.open_dropdown(kind, form);
                None
            }
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.row = DropdownKind::Genre;
        self.open = None;
    }

    fn height(&self, form: &FormState) -> u16 {
        let rows = if form.genre.is_empty() { 1 } else { 2 };
        let dropdown = self
            .open
            .as_ref()
            .map(|(_, select)| select.desired_height())
            .unwrap_or(0);
        rows + 2 + dropdown
    }
}

use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::util::colors;

#[derive(Debug, Clone)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
}

impl SelectItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub enum SelectOutcome {
    Pending,
    Picked(String),
    Closed,
}

/// Dropdown list with type-to-filter. Arrow keys move, Enter picks, Esc
/// closes; any printable character narrows the list.
pub struct SelectList {
    title: String,
    items: Vec<SelectItem>,
    filter: String,
    filtered: Vec<usize>,
    list_state: ListState,
    matcher: Matcher,
}

impl SelectList {
    pub fn new(title: impl Into<String>, items: Vec<SelectItem>) -> Self {
        let filtered = (0..items.len()).collect();
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            title: title.into(),
            items,
            filter: String::new(),
            filtered,
            list_state,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SelectOutcome {
        match key.code {
            KeyCode::Esc => SelectOutcome::Closed,
            KeyCode::Enter => {
                let picked = self
                    .list_state
                    .selected()
                    .and_then(|i| self.filtered.get(i))
                    .and_then(|i| self.items.get(*i));
                match picked {
                    Some(item) => SelectOutcome::Picked(item.value.clone()),
                    None => SelectOutcome::Closed,
                }
            }
            KeyCode::Down => {
                let i = self.list_state.selected().unwrap_or(0);
                if i + 1 < self.filtered.len() {
                    self.list_state.select(Some(i + 1));
                }
                SelectOutcome::Pending
            }
            KeyCode::Up => {
                let i = self.list_state.selected().unwrap_or(0);
                if i > 0 {
                    self.list_state.select(Some(i - 1));
                }
                SelectOutcome::Pending
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.filter.push(c);
                self.refilter();
                SelectOutcome::Pending
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.refilter();
                SelectOutcome::Pending
            }
            _ => SelectOutcome::Pending,
        }
    }

    fn refilter(&mut self) {
        if self.filter.is_empty() {
            self.filtered = (0..self.items.len()).collect();
        } else {
            let pattern =
                Pattern::parse(&self.filter, CaseMatching::Ignore, Normalization::Smart);
            let mut buf = Vec::new();
            let mut scored: Vec<(usize, u32)> = self
                .items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    pattern
                        .score(Utf32Str::new(&item.label, &mut buf), &mut self.matcher)
                        .map(|score| (i, score))
                })
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered = scored.into_iter().map(|(i, _)| i).collect();
        }
        self.list_state.select(if self.filtered.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    pub fn desired_height(&self) -> u16 {
        let rows = self.filtered.len().clamp(1, 6) as u16;
        // filter line + list rows + borders
        rows + 3
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .border_style(Style::default().fg(colors::PRIMARY));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        let filter_text = if self.filter.is_empty() {
            Paragraph::new("type to filter").style(Style::default().fg(colors::NEUTRAL))
        } else {
            Paragraph::new(format!("/{}", self.filter))
                .style(Style::default().fg(colors::ACCENT))
        };
        f.render_widget(filter_text, chunks[0]);

        let items: Vec<ListItem> = self
            .filtered
            .iter()
            .filter_map(|i| self.items.get(*i))
            .map(|item| ListItem::new(format!("  {}", item.label)))
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn genres() -> Vec<SelectItem> {
        vec![
            SelectItem::new("pop", "Pop"),
            SelectItem::new("rock", "Rock"),
            SelectItem::new("hip-hop", "Hip-hop"),
        ]
    }

    #[test]
    fn enter_picks_the_highlighted_value() {
        let mut select = SelectList::new("Genre", genres());
        select.handle_key(key(KeyCode::Down));
        match select.handle_key(key(KeyCode::Enter)) {
            SelectOutcome::Picked(value) => assert_eq!(value, "rock"),
            _ => panic!("expected a pick"),
        }
    }

    #[test]
    fn filtering_narrows_and_reselects_the_top_match() {
        let mut select = SelectList::new("Genre", genres());
        for c in "hip".chars() {
            select.handle_key(key(KeyCode::Char(c)));
        }
        match select.handle_key(key(KeyCode::Enter)) {
            SelectOutcome::Picked(value) => assert_eq!(value, "hip-hop"),
            _ => panic!("expected a pick"),
        }
    }

    #[test]
    fn enter_with_no_match_closes() {
        let mut select = SelectList::new("Genre", genres());
        for c in "zzz".chars() {
            select.handle_key(key(KeyCode::Char(c)));
        }
        assert!(matches!(
            select.handle_key(key(KeyCode::Enter)),
            SelectOutcome::Closed
        ));
    }

    #[test]
    fn escape_closes_without_picking() {
        let mut select = SelectList::new("Genre", genres());
        assert!(matches!(
            select.handle_key(key(KeyCode::Esc)),
            SelectOutcome::Closed
        ));
    }
}

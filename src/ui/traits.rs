use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::{Event, FormEvent},
    form::state::FormState,
    ui::context::AppContext,
};

/// One focusable slice of the creation form. Sections render from the shared
/// [`FormState`] and report edits upward as [`FormEvent`]s; the form view's
/// reducer is the only place the state changes. Sections stay on the UI
/// thread; the recorder holds a live capture stream that must not cross
/// threads.
pub trait Section {
    fn render(&mut self, f: &mut Frame, area: Rect, form: &FormState, focused: bool);

    fn handle_key(
        &mut self,
        key: KeyEvent,
        form: &FormState,
        ctx: &mut AppContext,
    ) -> Option<FormEvent>;

    /// Pasted text routed to the focused section (the terminal's drop
    /// gesture lands here).
    fn on_paste(
        &mut self,
        _text: &str,
        _form: &FormState,
        _ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        None
    }

    fn on_event(&mut self, _event: &Event, _ctx: &mut AppContext) {}

    /// Back to the pristine, never-touched presentation.
    fn reset(&mut self) {}

    /// Rows this section wants in the current form state.
    fn height(&self, form: &FormState) -> u16;
}

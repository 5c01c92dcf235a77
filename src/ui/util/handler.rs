use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }

        Ok(())
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => app.view.handle_paste(&text, &mut app.ctx),
            TerminalEvent::Tick => app.view.poll(&mut app.ctx),
            TerminalEvent::Resize(_, _) => {}
        }

        Ok(())
    }

    fn handle_action(app: &mut App, evt: Event) {
        app.view.on_event(&evt, &mut app.ctx);
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        // Global shortcuts first, then the focused section, then the
        // fallback map.
        match (evt.code, evt.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                app.should_quit = true;
                return;
            }
            (KeyCode::Tab, _) => {
                app.view.focus_next();
                return;
            }
            (KeyCode::BackTab, _) => {
                app.view.focus_previous();
                return;
            }
            _ => {}
        }

        if app.view.handle_key(evt, &mut app.ctx) {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            Self::dispatch(app, msg);
        }
    }

    fn dispatch(app: &mut App, msg: AppMessage) {
        match msg {
            AppMessage::Quit => app.should_quit = true,
            AppMessage::NextSection => app.view.focus_next(),
            AppMessage::PreviousSection => app.view.focus_previous(),
            AppMessage::Submit => app.view.request_submit(&mut app.ctx),
            AppMessage::DismissNotice => app.view.dismiss_notice(),
        }
    }
}

use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::error;

use crate::{
    audio::recorder::Recorder,
    event::events::{Event, FormEvent},
    form::state::FormState,
    ui::{context::AppContext, traits::Section},
    util::{colors, format::format_elapsed},
};

const TIMER_TASK: &str = "recording_timer";

/// Microphone recording. The section owns the recorder state machine; the
/// one-second timer runs as a background task and ticks back in through the
/// event channel.
pub struct RecorderSection {
    recorder: Recorder,
}

impl RecorderSection {
    pub fn new() -> Self {
        Self {
            recorder: Recorder::new(),
        }
    }

    /// Playback drains on its own; drop the spent handle.
    pub fn poll(&mut self) {
        self.recorder.poll_playback();
    }

    fn toggle_recording(&mut self, ctx: &mut AppContext) -> Option<FormEvent> {
        if self.recorder.is_recording() {
            ctx.tasks.abort(TIMER_TASK);
            return self.recorder.stop().map(FormEvent::RecordingFinished);
        }

        match self.recorder.start() {
            Ok(()) => {
                let tx = ctx.event_tx.clone();
                ctx.tasks.spawn(
                    TIMER_TASK,
                    tokio::spawn(async move {
                        let mut ticker = tokio::time::interval(Duration::from_secs(1));
                        // The first tick resolves immediately.
                        ticker.tick().await;
                        loop {
                            ticker.tick().await;
                            let _ = tx.send(Event::RecordingTick);
                        }
                    }),
                );
            }
            Err(e) => error!("could not access the microphone: {e}"),
        }
        None
    }
}

impl Default for RecorderSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for RecorderSection {
    fn render(&mut self, f: &mut Frame, area: Rect, _form: &FormState, focused: bool) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("2. Record audio (optional)")
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut controls: Vec<Span> = Vec::new();
        if self.recorder.is_recording() {
            controls.push(Span::styled(
                "[r] stop",
                Style::default()
                    .fg(colors::DANGER)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            controls.push(Span::styled(
                "[r] record",
                Style::default().fg(colors::PRIMARY),
            ));
        }
        if self.recorder.clip().is_some() {
            controls.push(Span::raw("  "));
            if self.recorder.is_playing() {
                controls.push(Span::styled(
                    "[p] pause",
                    Style::default().fg(colors::ACCENT),
                ));
            } else {
                controls.push(Span::styled(
                    "[p] play",
                    Style::default().fg(colors::ACCENT),
                ));
            }
            controls.push(Span::raw("  "));
            controls.push(Span::styled(
                "[x] discard",
                Style::default().fg(colors::DANGER),
            ));
        }

        let elapsed = self.recorder.elapsed_secs();
        let mut lines = vec![Line::from(controls)];
        if self.recorder.is_recording() || elapsed > 0 {
            let mut status: Vec<Span> = Vec::new();
            if self.recorder.is_recording() {
                // Pulse once a second off the elapsed counter.
                let dot = if elapsed % 2 == 0 { "●" } else { "○" };
                status.push(Span::styled(
                    format!("{dot} "),
                    Style::default().fg(colors::DANGER),
                ));
            }
            status.push(Span::styled(
                format_elapsed(elapsed),
                Style::default().fg(colors::NEUTRAL),
            ));
            lines.push(Line::from(status));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        _form: &FormState,
        ctx: &mut AppContext,
    ) -> Option<FormEvent> {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char(' ') => self.toggle_recording(ctx),
            KeyCode::Char('p') => {
                if self.recorder.clip().is_some() {
                    if self.recorder.is_playing() {
                        self.recorder.pause();
                    } else {
                        self.recorder.play(&ctx.audio);
                    }
                }
                None
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if self.recorder.clear() {
                    Some(FormEvent::RecordingCleared)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn on_event(&mut self, event: &Event, _ctx: &mut AppContext) {
        if matches!(event, Event::RecordingTick) {
            self.recorder.tick();
        }
    }

    fn reset(&mut self) {
        self.recorder.clear();
    }

    fn height(&self, _form: &FormState) -> u16 {
        4
    }
}

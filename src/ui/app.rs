use flume::Receiver;

use ratatui::Frame;

use crate::{
    audio::playback::PlaybackEngine,
    event::events::Event,
    ui::{context::AppContext, layout::AppLayout, views::FormView},
    util::task::TaskManager,
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub view: FormView,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let audio = PlaybackEngine::new()?;
        let ctx = AppContext {
            event_tx,
            audio,
            tasks: TaskManager::new(),
        };

        Ok(Self {
            event_rx,
            ctx,
            view: FormView::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.paste(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        // Any running timer or in-flight submission dies with the app.
        self.ctx.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}

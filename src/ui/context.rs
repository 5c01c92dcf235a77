use flume::Sender;

use crate::{audio::playback::PlaybackEngine, event::events::Event, util::task::TaskManager};

/// Shared capabilities handed to sections: the event channel for background
/// notifications, the playback engine and the task manager.
pub struct AppContext {
    pub event_tx: Sender<Event>,
    pub audio: PlaybackEngine,
    pub tasks: TaskManager,
}

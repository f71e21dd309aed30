use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use shiori_core::types::{AppEvent, UserIntent};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::input_io;
use crate::source::LookupSource;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),  // rendered pages
            ui_to_app: kanal::bounded_async(256), // intents plus lookup results
        }
    }
}

/// Which spawned task a join result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    EventLoop,
    Presenter,
    Input,
}

pub type TaskResult = (TaskKind, anyhow::Result<()>);

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Queue an intent before or while the tasks run
    pub async fn submit(&self, intent: UserIntent) -> anyhow::Result<()> {
        self.channels
            .ui_to_app
            .0
            .send(AppEvent::Intent(intent))
            .await?;
        Ok(())
    }

    pub fn spawn_tasks(&self, source: Arc<dyn LookupSource>) -> JoinSet<TaskResult> {
        let mut tasks = JoinSet::new();

        // Event loop
        let events = event_loop(
            self.state.clone(),
            source,
            self.channels.ui_to_app.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
        );
        tasks.spawn(async move { (TaskKind::EventLoop, events.await) });

        // Presenter
        let presenter = ui_loop(self.channels.app_to_ui.1.clone());
        tasks.spawn(async move { (TaskKind::Presenter, presenter.await) });

        // Input
        let input = input_io(
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        );
        tasks.spawn(async move { (TaskKind::Input, input.await) });

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

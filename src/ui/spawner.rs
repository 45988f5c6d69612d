use std::future::Future;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::ui::events::AppEvent;

/// Runs fetches on the tokio runtime and posts their outcome to the UI
/// event channel.
#[derive(Clone)]
pub struct TaskSpawner {
    handle: Handle,
    events: Sender<AppEvent>,
}

impl TaskSpawner {
    pub fn new(handle: Handle, events: Sender<AppEvent>) -> Self {
        Self { handle, events }
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let events = self.events.clone();
        self.handle.spawn(async move {
            let event = task.await;
            if events.send(event).is_err() {
                tracing::debug!("UI event channel closed, dropping fetch result");
            }
        });
    }
}

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::runtime::Handle;

use crate::context::AppContext;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::screens::Screen;
use crate::ui::spawner::TaskSpawner;
use crate::ui::terminal_guard::TerminalGuard;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the terminal UI until the user quits.
///
/// Drawing and input stay on the calling thread; fetches run on `handle`.
pub fn run(context: AppContext, screen: Screen, today: NaiveDate, handle: Handle) -> io::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let events = EventHandler::new(TICK_RATE);
    let spawner = TaskSpawner::new(handle, events.sender());
    let mut app = App::new(context, spawner, screen, today);
    tracing::info!(screen = ?screen, "UI started");

    loop {
        guard.terminal().draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    guard.restore()?;
    tracing::info!("UI stopped");
    Ok(())
}

use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens::{color, counter, expenses, github, tasks, temperature, tip, weather, Screen};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new(app.screen()).widget(), header);
    frame.render_widget(Clear, body);

    let context = app.context();
    match app.screen() {
        Screen::Counter => counter::render(frame, body, app.counter()),
        Screen::Color => color::render(frame, body, app.color()),
        Screen::Temperature => temperature::render(frame, body, app.temperature()),
        Screen::Tip => tip::render(frame, body, app.tip()),
        Screen::Tasks => tasks::render(frame, body, app.tasks(), &context.tasks),
        Screen::Weather => weather::render(frame, body, app.weather()),
        Screen::GitHub => github::render(frame, body, app.github(), &context.favorites),
        Screen::Expenses => expenses::render(frame, body, app.expenses(), &context.expenses),
    }

    let footer_widget = Footer::new(app.screen(), app.status());
    frame.render_widget(footer_widget.widget(footer), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::AppContext;
    use crate::storage::MemoryStore;
    use crate::ui::spawner::TaskSpawner;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::mpsc;

    fn screen_text(screen: Screen) -> String {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let (tx, _rx) = mpsc::channel();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let context =
            AppContext::with_store(&Config::default(), Box::new(MemoryStore::new()), today)
                .unwrap();
        let app = App::new(
            context,
            TaskSpawner::new(runtime.handle().clone(), tx),
            screen,
            today,
        );

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn every_screen_renders() {
        for screen in Screen::ALL {
            let text = screen_text(screen);
            assert!(text.contains(screen.title()), "{screen:?} missing tab title");
        }
    }

    #[test]
    fn screens_show_their_content() {
        assert!(screen_text(Screen::Temperature).contains("0.0 °C is 32.0 °F"));
        assert!(screen_text(Screen::Tip).contains("Total Amount: 0.00"));
        assert!(screen_text(Screen::Tasks).contains("Finish SwiftUI project"));
        assert!(screen_text(Screen::Weather).contains("Search for a City"));
        assert!(screen_text(Screen::GitHub).contains("Search GitHub Users"));
        assert!(screen_text(Screen::Expenses).contains("1418.20"));
    }
}

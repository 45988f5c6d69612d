use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    Reset,
}

impl Intent for CounterIntent {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = match intent {
            CounterIntent::Increment => state.count.saturating_add(1),
            CounterIntent::Decrement => state.count.saturating_sub(1),
            CounterIntent::Reset => 0,
        };
        CounterState { count }
    }
}

pub fn intent_for_key(key: KeyEvent) -> Option<CounterIntent> {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
            Some(CounterIntent::Increment)
        }
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => Some(CounterIntent::Decrement),
        KeyCode::Char('r') | KeyCode::Char('0') => Some(CounterIntent::Reset),
        _ => None,
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &CounterState) {
    let color = match state.count {
        n if n > 0 => STATUS_OK,
        n if n < 0 => STATUS_ERROR,
        _ => HEADER_TEXT,
    };
    let lines = vec![
        Line::from(""),
        Line::styled(
            state.count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("[-]   [Reset]   [+]", Style::default().fg(MUTED_TEXT)),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

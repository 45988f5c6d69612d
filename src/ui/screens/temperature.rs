use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::text_field::{parse_or_zero, TextEdit};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemperatureState {
    pub celsius_input: String,
}

impl UiState for TemperatureState {}

impl TemperatureState {
    pub fn celsius(&self) -> f64 {
        parse_or_zero(&self.celsius_input)
    }

    pub fn fahrenheit(&self) -> f64 {
        self.celsius() * 9.0 / 5.0 + 32.0
    }

    pub fn summary(&self) -> String {
        format!("{:.1} °C is {:.1} °F", self.celsius(), self.fahrenheit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureIntent {
    Edit(TextEdit),
}

impl Intent for TemperatureIntent {}

pub struct TemperatureReducer;

impl Reducer for TemperatureReducer {
    type State = TemperatureState;
    type Intent = TemperatureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TemperatureIntent::Edit(edit) => TemperatureState {
                celsius_input: edit.apply(state.celsius_input),
            },
        }
    }
}

pub fn intent_for_key(key: KeyEvent) -> Option<TemperatureIntent> {
    TextEdit::from_key(key).map(TemperatureIntent::Edit)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &TemperatureState) {
    let input = if state.celsius_input.is_empty() {
        Line::styled("Enter Celsius", Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(format!("{}▏", state.celsius_input), Style::default().fg(HEADER_TEXT))
    };
    let lines = vec![
        Line::from(""),
        input,
        Line::from(""),
        Line::styled(
            state.summary(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Temperature Converter ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_input(input: &str) -> TemperatureState {
        TemperatureState {
            celsius_input: input.to_string(),
        }
    }

    #[test]
    fn converts_celsius() {
        assert_eq!(with_input("100").summary(), "100.0 °C is 212.0 °F");
        assert_eq!(with_input("-40").summary(), "-40.0 °C is -40.0 °F");
        assert_eq!(with_input("36.6").summary(), "36.6 °C is 97.9 °F");
    }

    #[test]
    fn unparsable_input_is_zero() {
        assert_eq!(with_input("").summary(), "0.0 °C is 32.0 °F");
        assert_eq!(with_input("warm").summary(), "0.0 °C is 32.0 °F");
    }

    #[test]
    fn edits_update_input() {
        let state = [TextEdit::Insert('2'), TextEdit::Insert('5')]
            .into_iter()
            .fold(TemperatureState::default(), |state, edit| {
                TemperatureReducer::reduce(state, TemperatureIntent::Edit(edit))
            });
        assert_eq!(state.celsius_input, "25");
        assert_eq!(state.fahrenheit(), 77.0);
    }
}

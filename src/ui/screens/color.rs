use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Step for PgUp/PgDn.
pub const COARSE_STEP: i16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    fn tint(self) -> Color {
        match self {
            Channel::Red => Color::Red,
            Channel::Green => Color::Green,
            Channel::Blue => Color::Blue,
        }
    }

    fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }

    fn previous(self) -> Self {
        match self {
            Channel::Red => Channel::Blue,
            Channel::Green => Channel::Red,
            Channel::Blue => Channel::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub focused: Channel,
}

impl UiState for ColorState {}

impl ColorState {
    pub fn value(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    pub fn color(&self) -> Color {
        Color::Rgb(self.red, self.green, self.blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorIntent {
    FocusNext,
    FocusPrevious,
    /// Move the focused channel, clamped to 0..=255.
    Adjust(i16),
}

impl Intent for ColorIntent {}

pub struct ColorReducer;

impl Reducer for ColorReducer {
    type State = ColorState;
    type Intent = ColorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ColorIntent::FocusNext => state.focused = state.focused.next(),
            ColorIntent::FocusPrevious => state.focused = state.focused.previous(),
            ColorIntent::Adjust(delta) => {
                let current = i16::from(state.value(state.focused));
                let value = (current + delta).clamp(0, 255) as u8;
                state.set(state.focused, value);
            }
        }
        state
    }
}

pub fn intent_for_key(key: KeyEvent) -> Option<ColorIntent> {
    match key.code {
        KeyCode::Down => Some(ColorIntent::FocusNext),
        KeyCode::Up => Some(ColorIntent::FocusPrevious),
        KeyCode::Right => Some(ColorIntent::Adjust(1)),
        KeyCode::Left => Some(ColorIntent::Adjust(-1)),
        KeyCode::PageUp => Some(ColorIntent::Adjust(COARSE_STEP)),
        KeyCode::PageDown => Some(ColorIntent::Adjust(-COARSE_STEP)),
        _ => None,
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ColorState) {
    let block = Block::default()
        .title(" Color Picker ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    let swatch = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_TEXT))
        .style(Style::default().bg(state.color()));
    frame.render_widget(swatch, rows[0]);

    for (channel, row) in Channel::ALL.iter().zip(rows.iter().skip(1)) {
        let value = state.value(*channel);
        let marker = if *channel == state.focused { "▶ " } else { "  " };
        let label = Line::from(vec![
            Span::styled(marker, Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("{}: {}", channel.name(), value),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(*row);
        frame.render_widget(Paragraph::new(label), parts[0]);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(channel.tint()))
                .ratio(f64::from(value) / 255.0)
                .label(""),
            parts[1],
        );
    }
}

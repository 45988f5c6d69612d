use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::text_field::{parse_or_zero, TextEdit};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const TIP_PERCENTAGES: [u32; 3] = [15, 18, 20];
const DEFAULT_TIP_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipState {
    pub bill_input: String,
    /// Index into [`TIP_PERCENTAGES`].
    pub tip_index: usize,
}

impl Default for TipState {
    fn default() -> Self {
        Self {
            bill_input: String::new(),
            tip_index: DEFAULT_TIP_INDEX,
        }
    }
}

impl UiState for TipState {}

impl TipState {
    pub fn bill(&self) -> f64 {
        parse_or_zero(&self.bill_input)
    }

    pub fn tip_percentage(&self) -> u32 {
        TIP_PERCENTAGES[self.tip_index.min(TIP_PERCENTAGES.len() - 1)]
    }

    pub fn tip(&self) -> f64 {
        self.bill() * f64::from(self.tip_percentage()) / 100.0
    }

    pub fn total(&self) -> f64 {
        self.bill() + self.tip()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipIntent {
    Edit(TextEdit),
    NextPercentage,
    PreviousPercentage,
}

impl Intent for TipIntent {}

pub struct TipReducer;

impl Reducer for TipReducer {
    type State = TipState;
    type Intent = TipIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let last = TIP_PERCENTAGES.len() - 1;
        match intent {
            TipIntent::Edit(edit) => TipState {
                bill_input: edit.apply(state.bill_input),
                ..state
            },
            TipIntent::NextPercentage => TipState {
                tip_index: (state.tip_index + 1).min(last),
                ..state
            },
            TipIntent::PreviousPercentage => TipState {
                tip_index: state.tip_index.saturating_sub(1),
                ..state
            },
        }
    }
}

pub fn intent_for_key(key: KeyEvent) -> Option<TipIntent> {
    match key.code {
        KeyCode::Right => Some(TipIntent::NextPercentage),
        KeyCode::Left => Some(TipIntent::PreviousPercentage),
        _ => TextEdit::from_key(key).map(TipIntent::Edit),
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &TipState) {
    let text = Style::default().fg(HEADER_TEXT);
    let input = if state.bill_input.is_empty() {
        Line::styled("Enter bill amount", Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(format!("{}▏", state.bill_input), text)
    };

    let mut picker = vec![Span::styled("Tip Percentage: ", text)];
    for (index, pct) in TIP_PERCENTAGES.iter().enumerate() {
        let style = if index == state.tip_index {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        picker.push(Span::styled(format!(" {pct}% "), style));
    }

    let lines = vec![
        input,
        Line::from(""),
        Line::from(picker),
        Line::from(""),
        Line::styled(format!("Bill Amount: {:.2}", state.bill()), text),
        Line::styled(format!("Tip Amount: {:.2}", state.tip()), text),
        Line::styled(
            format!("Total Amount: {:.2}", state.total()),
            text.add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Tip Calculator ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_bill(bill: &str) -> TipState {
        TipState {
            bill_input: bill.to_string(),
            ..TipState::default()
        }
    }

    #[test]
    fn defaults_to_eighteen_percent() {
        let state = with_bill("100");
        assert_eq!(state.tip_percentage(), 18);
        assert!((state.tip() - 18.0).abs() < 1e-9);
        assert!((state.total() - 118.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_picker_is_bounded() {
        let state = TipReducer::reduce(with_bill("50"), TipIntent::NextPercentage);
        assert_eq!(state.tip_percentage(), 20);
        let state = TipReducer::reduce(state, TipIntent::NextPercentage);
        assert_eq!(state.tip_percentage(), 20);
        let state = TipReducer::reduce(state, TipIntent::PreviousPercentage);
        let state = TipReducer::reduce(state, TipIntent::PreviousPercentage);
        let state = TipReducer::reduce(state, TipIntent::PreviousPercentage);
        assert_eq!(state.tip_percentage(), 15);
        assert!((state.total() - 57.5).abs() < 1e-9);
    }

    #[test]
    fn unparsable_bill_is_zero() {
        let state = with_bill("lots");
        assert_eq!(state.bill(), 0.0);
        assert_eq!(format!("{:.2}", state.total()), "0.00");
    }
}

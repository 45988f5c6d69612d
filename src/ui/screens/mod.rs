//! One module per exercise screen.
//!
//! Simple screens keep state, intent, reducer and view in one file. Screens
//! that talk to a service are split into directories like the other MVI
//! features.

pub mod color;
pub mod counter;
pub mod expenses;
pub mod github;
pub mod tasks;
pub mod temperature;
pub mod tip;
pub mod weather;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Screen {
    #[default]
    Counter,
    Color,
    Temperature,
    Tip,
    Tasks,
    Weather,
    #[value(name = "github")]
    GitHub,
    Expenses,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Counter,
        Screen::Color,
        Screen::Temperature,
        Screen::Tip,
        Screen::Tasks,
        Screen::Weather,
        Screen::GitHub,
        Screen::Expenses,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Counter => "Counter",
            Screen::Color => "Color Picker",
            Screen::Temperature => "Temperature",
            Screen::Tip => "Tip Calculator",
            Screen::Tasks => "Tasks",
            Screen::Weather => "Weather",
            Screen::GitHub => "GitHub",
            Screen::Expenses => "Expenses",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Move a list selection by `delta`, clamped to `len`.
pub(crate) fn step_selection(selected: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_cycle() {
        assert_eq!(Screen::Counter.next(), Screen::Color);
        assert_eq!(Screen::Expenses.next(), Screen::Counter);
        assert_eq!(Screen::Counter.previous(), Screen::Expenses);
        for screen in Screen::ALL {
            assert_eq!(screen.next().previous(), screen);
        }
    }

    #[test]
    fn cli_names() {
        assert_eq!(Screen::from_str("github", true), Ok(Screen::GitHub));
        assert_eq!(Screen::from_str("tip", true), Ok(Screen::Tip));
    }

    #[test]
    fn selection_is_clamped() {
        assert_eq!(step_selection(0, -1, 3), 0);
        assert_eq!(step_selection(2, 1, 3), 2);
        assert_eq!(step_selection(1, 1, 3), 2);
        assert_eq!(step_selection(5, 0, 0), 0);
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spending category. Serialized by display name ("Food", "Transport", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Housing,
    Other,
}

impl ExpenseCategory {
    /// All variants in declaration order.
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Utilities,
            Self::Housing,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Housing => "Housing",
            Self::Other => "Other",
        }
    }

    /// Single-glyph marker used in list rows.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍴",
            Self::Transport => "🚗",
            Self::Entertainment => "🎬",
            Self::Utilities => "💡",
            Self::Housing => "🏠",
            Self::Other => "🏷",
        }
    }

    /// Next category, wrapping around. Used by the add-expense form.
    pub fn next(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|c| c == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|c| c == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            category,
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Expense, ExpenseCategory};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Amount must be a positive number")]
    InvalidAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Amount,
    Category,
    Notes,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Title,
        FormField::Amount,
        FormField::Category,
        FormField::Notes,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Draft of a new expense. Dated the day it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: ExpenseCategory,
    pub notes: String,
    pub field: FormField,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: ExpenseCategory::Food,
            notes: String::new(),
            field: FormField::Title,
        }
    }
}

impl ExpenseForm {
    pub fn to_expense(&self, date: NaiveDate) -> Result<Expense, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or(FormError::InvalidAmount)?;

        let expense = Expense::new(title, amount, self.category, date);
        let notes = self.notes.trim();
        Ok(if notes.is_empty() {
            expense
        } else {
            expense.with_notes(notes)
        })
    }
}

use crate::ui::mvi::UiState;

use super::form::ExpenseForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// As entered.
    #[default]
    Ledger,
    NewestFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseScreenState {
    /// Highlighted row in the displayed order.
    pub selected: usize,
    pub order: ListOrder,
    pub form: Option<ExpenseForm>,
}

impl UiState for ExpenseScreenState {}

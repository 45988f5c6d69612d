//! Expense ledger screen with an add-expense form.

mod form;
mod intent;
mod reducer;
mod state;
mod view;

pub use form::{ExpenseForm, FormError, FormField};
pub use intent::{ExpenseIntent, FormIntent};
pub use reducer::ExpenseReducer;
pub use state::{ExpenseScreenState, ListOrder};
pub use view::render;

use crate::models::Expense;
use crate::services::ExpenseService;

/// Rows in the order the screen shows them.
pub fn displayed(service: &ExpenseService, order: ListOrder) -> Vec<&Expense> {
    match order {
        ListOrder::Ledger => service.expenses().iter().collect(),
        ListOrder::NewestFirst => service.sorted_by_date_desc(),
    }
}

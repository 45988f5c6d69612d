use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::models::{Expense, ExpenseCategory};

/// In-memory expense ledger kept in insertion order.
#[derive(Debug, Default)]
pub struct ExpenseService {
    expenses: Vec<Expense>,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the demo expenses, dated relative to `today`.
    pub fn with_demo_data(today: NaiveDate) -> Self {
        let days_ago = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);
        let expenses = vec![
            Expense::new("Groceries", 55.20, ExpenseCategory::Food, days_ago(2)),
            Expense::new("Bus Ticket", 3.50, ExpenseCategory::Transport, days_ago(1)),
            Expense::new("Movie Night", 25.00, ExpenseCategory::Entertainment, today),
            Expense::new("Electricity Bill", 75.00, ExpenseCategory::Utilities, days_ago(5)),
            Expense::new("Rent", 1200.00, ExpenseCategory::Housing, days_ago(10)),
            Expense::new("Coffee", 4.50, ExpenseCategory::Food, days_ago(3)),
            Expense::new("Dinner", 40.00, ExpenseCategory::Food, days_ago(1)),
            Expense::new("Uber", 15.00, ExpenseCategory::Transport, today),
        ];
        Self { expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn add_expense(&mut self, expense: Expense) {
        tracing::debug!(title = %expense.title, amount = expense.amount, "Expense added");
        self.expenses.push(expense);
    }

    /// Remove the expenses at `positions` and return them in ledger order.
    ///
    /// Positions refer to the ledger before any removal. Duplicates and
    /// out-of-range positions are ignored.
    pub fn delete_expenses(&mut self, positions: &[usize]) -> Vec<Expense> {
        let positions: BTreeSet<usize> = positions
            .iter()
            .copied()
            .filter(|&index| index < self.expenses.len())
            .collect();

        let mut removed: Vec<Expense> = positions
            .iter()
            .rev()
            .map(|&index| self.expenses.remove(index))
            .collect();
        removed.reverse();
        removed
    }

    /// Sum of all current amounts. Recomputed on every call.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Per-category sums in category declaration order, empty categories omitted.
    pub fn totals_by_category(&self) -> Vec<(ExpenseCategory, f64)> {
        ExpenseCategory::all()
            .iter()
            .filter_map(|&category| {
                let mut matching = self
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .peekable();
                matching.peek()?;
                Some((category, matching.map(|e| e.amount).sum()))
            })
            .collect()
    }

    /// Newest first. Ties keep ledger order. Does not reorder the ledger.
    pub fn sorted_by_date_desc(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

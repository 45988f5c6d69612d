use crate::ui::mvi::Reducer;
use crate::ui::screens::step_selection;

use super::form::{ExpenseForm, FormField};
use super::intent::{ExpenseIntent, FormIntent};
use super::state::{ExpenseScreenState, ListOrder};

pub struct ExpenseReducer;

impl Reducer for ExpenseReducer {
    type State = ExpenseScreenState;
    type Intent = ExpenseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ExpenseIntent::Move { delta, len } => ExpenseScreenState {
                selected: step_selection(state.selected, delta, len),
                ..state
            },
            ExpenseIntent::ToggleOrder => ExpenseScreenState {
                order: match state.order {
                    ListOrder::Ledger => ListOrder::NewestFirst,
                    ListOrder::NewestFirst => ListOrder::Ledger,
                },
                selected: 0,
                ..state
            },
            ExpenseIntent::OpenForm => ExpenseScreenState {
                form: Some(ExpenseForm::default()),
                ..state
            },
            ExpenseIntent::CloseForm => ExpenseScreenState { form: None, ..state },
            ExpenseIntent::Form(intent) => ExpenseScreenState {
                form: state.form.map(|form| reduce_form(form, intent)),
                ..state
            },
            ExpenseIntent::Clamp { len } => ExpenseScreenState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
        }
    }
}

fn reduce_form(mut form: ExpenseForm, intent: FormIntent) -> ExpenseForm {
    match intent {
        FormIntent::Edit(edit) => match form.field {
            FormField::Title => form.title = edit.apply(form.title),
            FormField::Amount => form.amount = edit.apply(form.amount),
            FormField::Notes => form.notes = edit.apply(form.notes),
            FormField::Category => {}
        },
        FormIntent::NextField => form.field = form.field.next(),
        FormIntent::PreviousField => form.field = form.field.previous(),
        FormIntent::NextCategory => form.category = form.category.next(),
        FormIntent::PreviousCategory => form.category = form.category.previous(),
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use crate::ui::text_field::TextEdit;

    fn reduce_all(intents: &[ExpenseIntent]) -> ExpenseScreenState {
        intents
            .iter()
            .fold(ExpenseScreenState::default(), |state, intent| {
                ExpenseReducer::reduce(state, *intent)
            })
    }

    #[test]
    fn form_edits_focused_field() {
        use ExpenseIntent::*;
        use FormIntent::*;
        let state = reduce_all(&[
            OpenForm,
            Form(Edit(TextEdit::Insert('T'))),
            Form(NextField),
            Form(Edit(TextEdit::Insert('9'))),
            Form(NextField),
            Form(Edit(TextEdit::Insert('x'))),
            Form(NextCategory),
        ]);
        let form = state.form.unwrap();
        assert_eq!(form.title, "T");
        assert_eq!(form.amount, "9");
        assert_eq!(form.category, ExpenseCategory::Transport);
        assert_eq!(form.field, FormField::Category);
    }

    #[test]
    fn form_intents_without_form_are_ignored() {
        let state = reduce_all(&[ExpenseIntent::Form(FormIntent::NextField)]);
        assert!(state.form.is_none());
    }

    #[test]
    fn toggling_order_resets_selection() {
        let state = reduce_all(&[
            ExpenseIntent::Move { delta: 3, len: 8 },
            ExpenseIntent::ToggleOrder,
        ]);
        assert_eq!(state.selected, 0);
        assert_eq!(state.order, ListOrder::NewestFirst);
    }

    #[test]
    fn clamp_follows_deletions() {
        let state = reduce_all(&[
            ExpenseIntent::Move { delta: 7, len: 8 },
            ExpenseIntent::Clamp { len: 7 },
        ]);
        assert_eq!(state.selected, 6);
    }
}

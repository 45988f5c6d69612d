use crate::ui::mvi::Intent;
use crate::ui::text_field::TextEdit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    Edit(TextEdit),
    NextField,
    PreviousField,
    NextCategory,
    PreviousCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseIntent {
    Move { delta: isize, len: usize },
    ToggleOrder,
    OpenForm,
    CloseForm,
    Form(FormIntent),
    /// Keep the highlight inside a list of `len` rows.
    Clamp { len: usize },
}

impl Intent for ExpenseIntent {}

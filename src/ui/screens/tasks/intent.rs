use crate::ui::mvi::Intent;
use crate::ui::text_field::TextEdit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskScreenIntent {
    /// Move the selection in the focused pane. `len` is that pane's length.
    Move { delta: isize, len: usize },
    Focus(super::Pane),
    OpenDraft,
    EditDraft(TextEdit),
    CloseDraft,
    /// Keep selections inside the lists after the board changed.
    Clamp { categories: usize, tasks: usize },
}

impl Intent for TaskScreenIntent {}

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Categories,
    Tasks,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskScreenState {
    pub pane: Pane,
    /// Position in the board's category list.
    pub category: usize,
    /// Position in the selected category's task list.
    pub task: usize,
    /// Title being typed for a new task, while the add form is open.
    pub draft: Option<String>,
}

impl UiState for TaskScreenState {}

impl TaskScreenState {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

use crate::ui::mvi::Reducer;
use crate::ui::screens::step_selection;

use super::intent::TaskScreenIntent;
use super::state::{Pane, TaskScreenState};

pub struct TaskScreenReducer;

impl Reducer for TaskScreenReducer {
    type State = TaskScreenState;
    type Intent = TaskScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TaskScreenIntent::Move { delta, len } => match state.pane {
                Pane::Categories => {
                    let category = step_selection(state.category, delta, len);
                    // A different category starts at its first task.
                    let task = if category == state.category { state.task } else { 0 };
                    TaskScreenState {
                        category,
                        task,
                        ..state
                    }
                }
                Pane::Tasks => TaskScreenState {
                    task: step_selection(state.task, delta, len),
                    ..state
                },
            },
            TaskScreenIntent::Focus(pane) => TaskScreenState { pane, ..state },
            TaskScreenIntent::OpenDraft => TaskScreenState {
                draft: Some(String::new()),
                ..state
            },
            TaskScreenIntent::EditDraft(edit) => match state.draft {
                Some(draft) => TaskScreenState {
                    draft: Some(edit.apply(draft)),
                    ..state
                },
                None => state,
            },
            TaskScreenIntent::CloseDraft => TaskScreenState {
                draft: None,
                ..state
            },
            TaskScreenIntent::Clamp { categories, tasks } => TaskScreenState {
                category: state.category.min(categories.saturating_sub(1)),
                task: state.task.min(tasks.saturating_sub(1)),
                ..state
            },
        }
    }
}

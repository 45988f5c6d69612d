//! Categorized to-do list screen.
//!
//! Categories on the left, the selected category's tasks on the right. The
//! [`TaskBoard`](crate::services::TaskBoard) owns the data; this state only
//! tracks focus, selection and the add-task draft.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TaskScreenIntent;
pub use reducer::TaskScreenReducer;
pub use state::{Pane, TaskScreenState};
pub use view::render;

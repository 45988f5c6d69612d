//! GitHub user search with repository list and favorites.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::GitHubIntent;
pub use reducer::GitHubReducer;
pub use state::GitHubScreenState;
pub use view::render;

//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with an effect (service calls, spawning a
//! fetch) happens in [`App`](crate::ui::app::App) around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

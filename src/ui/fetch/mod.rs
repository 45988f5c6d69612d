//! Fetch lifecycle shared by the weather and GitHub screens.
//!
//! - `state.rs` - Initial → Loading → Loaded / Error
//! - `intent.rs` - Start, Succeeded, Failed, Reset
//! - `reducer.rs` - transitions, dropping completions of superseded requests
//! - `token.rs` - request tokens identifying each search

mod intent;
mod reducer;
mod state;
mod token;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;
pub use token::{RequestToken, RequestTokens};

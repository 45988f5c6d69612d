//! Terminal front end: one MVI screen per exercise, a synchronous draw loop,
//! and fetches spawned onto tokio that report back as events.

pub mod app;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod spawner;
pub mod terminal_guard;
pub mod text_field;
pub mod theme;

pub use runtime::run;

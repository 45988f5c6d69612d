//! Terminal playground for eight small, independent UI exercises.
//!
//! The crate is split into a library of services that can be driven without a
//! terminal, and a ratatui front end that hosts one screen per exercise.
//!
//! # Architecture
//!
//! - `config`: TOML configuration and default paths
//! - `models`: plain data records (users, repositories, weather, expenses, tasks)
//! - `storage`: key-value persistence used by the favorites store
//! - `services`: the units that own application state and mutate it
//! - `context`: explicit wiring of services for the UI
//! - `ui`: MVI state machines, rendering and the event loop

pub mod config;
pub mod context;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod ui;

pub use context::{AppContext, SetupError};
pub use services::ServiceError;

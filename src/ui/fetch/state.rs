use crate::ui::mvi::UiState;

use super::token::RequestToken;

/// View state of a screen backed by an asynchronous lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Initial,
    /// Waiting for the request identified by `token`.
    Loading { token: RequestToken },
    Loaded(T),
    /// Display message of the failure.
    Error(String),
}

// Manual impl: a derive would require `T: Default`.
impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Initial
    }
}

impl<T> UiState for FetchState<T> where T: Clone + PartialEq + Send + 'static {}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Whether a completion for `token` would be applied.
    pub fn awaits(&self, token: RequestToken) -> bool {
        matches!(self, Self::Loading { token: current } if *current == token)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

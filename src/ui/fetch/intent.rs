use crate::ui::mvi::Intent;

use super::token::RequestToken;

#[derive(Debug, Clone)]
pub enum FetchIntent<T> {
    /// A new search was issued.
    Start { token: RequestToken },
    Succeeded { token: RequestToken, value: T },
    Failed { token: RequestToken, message: String },
    Reset,
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}

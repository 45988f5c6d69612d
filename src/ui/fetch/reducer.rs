use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Fetch transitions for any payload type.
///
/// A completion is applied only while the state is `Loading` with the same
/// token. Anything else means a newer search (or a reset) superseded it, and
/// the completion is dropped.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T> Reducer for FetchReducer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    type State = FetchState<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { token } => FetchState::Loading { token },
            FetchIntent::Succeeded { token, value } if state.awaits(token) => {
                FetchState::Loaded(value)
            }
            FetchIntent::Failed { token, message } if state.awaits(token) => {
                FetchState::Error(message)
            }
            FetchIntent::Succeeded { .. } | FetchIntent::Failed { .. } => state,
            FetchIntent::Reset => FetchState::Initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fetch::RequestTokens;

    type State = FetchState<u32>;

    fn reduce(state: State, intent: FetchIntent<u32>) -> State {
        FetchReducer::<u32>::reduce(state, intent)
    }

    #[test]
    fn start_enters_loading() {
        let tokens = RequestTokens::new();
        let token = tokens.issue();
        let state = reduce(State::default(), FetchIntent::Start { token });
        assert_eq!(state, State::Loading { token });
        assert!(state.is_loading());
    }

    #[test]
    fn matching_completion_is_applied() {
        let token = RequestTokens::new().issue();
        let state = reduce(State::Loading { token }, FetchIntent::Succeeded { token, value: 8 });
        assert_eq!(state.loaded(), Some(&8));

        let state = reduce(
            State::Loading { token },
            FetchIntent::Failed {
                token,
                message: "User not found".to_string(),
            },
        );
        assert_eq!(state.error(), Some("User not found"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let tokens = RequestTokens::new();
        let first = tokens.issue();
        let second = tokens.issue();

        let state = reduce(State::default(), FetchIntent::Start { token: first });
        let state = reduce(state, FetchIntent::Start { token: second });

        // The first search resolves after the second was issued.
        let state = reduce(state, FetchIntent::Succeeded { token: first, value: 1 });
        assert_eq!(state, State::Loading { token: second });

        let state = reduce(state, FetchIntent::Succeeded { token: second, value: 2 });
        assert_eq!(state.loaded(), Some(&2));

        // A late failure of the first search must not clobber the result.
        let state = reduce(
            state,
            FetchIntent::Failed {
                token: first,
                message: "late".to_string(),
            },
        );
        assert_eq!(state.loaded(), Some(&2));
    }

    #[test]
    fn completion_after_reset_is_discarded() {
        let token = RequestTokens::new().issue();
        let state = reduce(State::Loading { token }, FetchIntent::Reset);
        let state = reduce(state, FetchIntent::Succeeded { token, value: 3 });
        assert_eq!(state, State::Initial);
    }
}

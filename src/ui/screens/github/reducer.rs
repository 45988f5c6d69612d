use crate::models::Profile;
use crate::ui::fetch::{FetchIntent, FetchReducer};
use crate::ui::mvi::Reducer;
use crate::ui::screens::step_selection;

use super::intent::GitHubIntent;
use super::state::GitHubScreenState;

pub struct GitHubReducer;

impl Reducer for GitHubReducer {
    type State = GitHubScreenState;
    type Intent = GitHubIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GitHubIntent::Edit(edit) => GitHubScreenState {
                username: edit.apply(state.username),
                ..state
            },
            GitHubIntent::Fetch(fetch) => {
                let selected = match fetch {
                    FetchIntent::Start { .. } | FetchIntent::Reset => 0,
                    _ => state.selected,
                };
                GitHubScreenState {
                    fetch: FetchReducer::<Profile>::reduce(state.fetch, fetch),
                    selected,
                    ..state
                }
            }
            GitHubIntent::Move(delta) => {
                let selected = step_selection(state.selected, delta, state.repositories().len());
                GitHubScreenState { selected, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GitHubUser, Repository};
    use crate::ui::fetch::RequestTokens;

    fn profile(repos: usize) -> Profile {
        Profile {
            user: GitHubUser {
                id: 583231,
                login: "octocat".to_string(),
                name: Some("The Octocat".to_string()),
                bio: None,
                avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
                public_repos: 8,
            },
            repositories: (0..repos as u64)
                .map(|id| Repository {
                    id,
                    name: format!("repo-{id}"),
                    description: None,
                    language: None,
                    stargazers_count: 0,
                    forks_count: 0,
                    html_url: String::new(),
                })
                .collect(),
        }
    }

    fn loaded(repos: usize) -> GitHubScreenState {
        let token = RequestTokens::new().issue();
        let state = GitHubReducer::reduce(
            GitHubScreenState::default(),
            GitHubIntent::Fetch(FetchIntent::Start { token }),
        );
        GitHubReducer::reduce(
            state,
            GitHubIntent::Fetch(FetchIntent::Succeeded {
                token,
                value: profile(repos),
            }),
        )
    }

    #[test]
    fn selection_moves_within_repositories() {
        let state = loaded(3);
        let state = GitHubReducer::reduce(state, GitHubIntent::Move(1));
        let state = GitHubReducer::reduce(state, GitHubIntent::Move(5));
        assert_eq!(state.selected, 2);
        assert_eq!(state.selected_repository().unwrap().name, "repo-2");
    }

    #[test]
    fn new_search_resets_selection() {
        let state = GitHubReducer::reduce(loaded(3), GitHubIntent::Move(2));
        let token = RequestTokens::new().issue();
        let state = GitHubReducer::reduce(state, GitHubIntent::Fetch(FetchIntent::Start { token }));
        assert_eq!(state.selected, 0);
        assert!(state.repositories().is_empty());
        assert!(state.selected_repository().is_none());
    }

    #[test]
    fn no_selection_without_results() {
        let state = GitHubReducer::reduce(GitHubScreenState::default(), GitHubIntent::Move(1));
        assert_eq!(state.selected, 0);
    }
}

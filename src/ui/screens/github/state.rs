use crate::models::{Profile, Repository};
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GitHubScreenState {
    pub username: String,
    pub fetch: FetchState<Profile>,
    /// Highlighted repository in the loaded list.
    pub selected: usize,
}

impl UiState for GitHubScreenState {}

impl GitHubScreenState {
    pub fn can_search(&self) -> bool {
        !self.username.trim().is_empty()
    }

    pub fn repositories(&self) -> &[Repository] {
        self.fetch
            .loaded()
            .map(|p| p.repositories.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_repository(&self) -> Option<&Repository> {
        self.repositories().get(self.selected)
    }
}

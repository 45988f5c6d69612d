use crate::models::Profile;
use crate::ui::fetch::FetchIntent;
use crate::ui::mvi::Intent;
use crate::ui::text_field::TextEdit;

#[derive(Debug, Clone)]
pub enum GitHubIntent {
    Edit(TextEdit),
    Fetch(FetchIntent<Profile>),
    /// Move the repository highlight.
    Move(isize),
}

impl Intent for GitHubIntent {}

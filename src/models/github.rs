use serde::{Deserialize, Serialize};

/// A GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub public_repos: u32,
}

impl GitHubUser {
    /// Name shown in the profile header; falls back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// A repository from `GET /users/{username}/repos`.
///
/// Also the record persisted by the favorites store, so the field names
/// double as the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub html_url: String,
}

/// A user together with their repositories, fetched as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user: GitHubUser,
    /// Sorted by star count, most starred first.
    pub repositories: Vec<Repository>,
}

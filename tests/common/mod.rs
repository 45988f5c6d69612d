//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use chrono::NaiveDate;
use learning_projects::config::{Config, GitHubConfig, WeatherConfig};
use learning_projects::storage::MemoryStore;
use learning_projects::AppContext;
use mock_backend::{MockBackend, MockResponse};

/// Fixed "today" so dated output is stable.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Config pointing GitHub at `base_url`, with instant weather.
pub fn test_config(base_url: &str) -> Config {
    Config {
        github: GitHubConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            ..GitHubConfig::default()
        },
        weather: WeatherConfig {
            latency_ms: 0,
            ..WeatherConfig::default()
        },
        ..Config::default()
    }
}

/// Context over `base_url` whose favorites live in `store`.
pub fn test_context(base_url: &str, store: MemoryStore) -> AppContext {
    AppContext::with_store(&test_config(base_url), Box::new(store), today())
        .expect("test context")
}

pub fn user_json(login: &str, public_repos: u32) -> String {
    format!(
        r#"{{
            "id": 583231,
            "login": "{login}",
            "name": "The Octocat",
            "bio": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "public_repos": {public_repos},
            "followers": 9999
        }}"#
    )
}

/// Repositories with the given star counts, ids starting at 1.
pub fn repos_json(stars: &[u32]) -> String {
    let items: Vec<String> = stars
        .iter()
        .enumerate()
        .map(|(i, stars)| {
            let id = i + 1;
            format!(
                r#"{{
                    "id": {id},
                    "name": "repo-{id}",
                    "description": null,
                    "language": "Rust",
                    "stargazers_count": {stars},
                    "forks_count": 0,
                    "html_url": "https://github.com/octocat/repo-{id}",
                    "private": false
                }}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

/// Register `login` with eight repositories on `backend`.
pub async fn serve_octocat(backend: &MockBackend, login: &str) {
    backend
        .route(
            &format!("/users/{login}"),
            MockResponse::json(&user_json(login, 8)),
        )
        .await;
    backend
        .route(
            &format!("/users/{login}/repos"),
            MockResponse::json(&repos_json(&[3, 42, 0, 7, 42, 1, 5, 12])),
        )
        .await;
}

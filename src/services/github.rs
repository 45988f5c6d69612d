//! GitHub user and repository lookup over the public REST API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::GitHubConfig;
use crate::models::{GitHubUser, Profile, Repository};
use crate::services::ServiceError;

/// Errors building a [`GitHubService`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid GitHub base URL '{0}'")]
    BaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Stateless GitHub client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct GitHubService {
    client: Client,
    base_url: String,
}

impl GitHubService {
    pub fn new(config: &GitHubConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        match Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ClientError::BaseUrl(config.base_url.clone())),
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `GET /users/{username}`.
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubUser, ServiceError> {
        let url = self.user_url(username, None)?;
        let response = self.get(url).await?;

        match response.status() {
            StatusCode::OK => decode(response).await,
            StatusCode::NOT_FOUND => {
                tracing::debug!(username, "GitHub user not found");
                Err(ServiceError::NotFound)
            }
            status => {
                tracing::warn!(username, status = status.as_u16(), "Unexpected status for user");
                Err(ServiceError::InvalidResponse)
            }
        }
    }

    /// `GET /users/{username}/repos`, most starred first.
    ///
    /// Repositories with equal star counts keep the order the server sent.
    pub async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<Repository>, ServiceError> {
        let url = self.user_url(username, Some("repos"))?;
        let response = self.get(url).await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(username, status = status.as_u16(), "Unexpected status for repos");
            return Err(ServiceError::InvalidResponse);
        }

        let mut repositories: Vec<Repository> = decode(response).await?;
        sort_by_stars(&mut repositories);
        Ok(repositories)
    }

    /// Fetch user and repositories concurrently.
    ///
    /// Both requests always run to completion. If both fail, the user
    /// lookup's error wins, so a missing user reports `NotFound` rather than
    /// the repository call's `InvalidResponse`.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, ServiceError> {
        let (user, repositories) =
            tokio::join!(self.fetch_user(username), self.fetch_repositories(username));
        let user = user?;
        let repositories = repositories?;

        tracing::info!(
            login = %user.login,
            repositories = repositories.len(),
            "GitHub profile loaded"
        );
        Ok(Profile { user, repositories })
    }

    fn user_url(&self, username: &str, suffix: Option<&str>) -> Result<Url, ServiceError> {
        if !is_valid_username(username) {
            tracing::debug!(username, "Rejected username before request");
            return Err(ServiceError::InvalidUrl);
        }

        let mut path = format!("/users/{username}");
        if let Some(suffix) = suffix {
            path.push('/');
            path.push_str(suffix);
        }
        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|_| ServiceError::InvalidUrl)?;

        // Parsing may escape or normalize the name; only the literal template is sent.
        if !url.path().ends_with(&path) || url.query().is_some() || url.fragment().is_some() {
            tracing::debug!(username, %url, "Username does not survive as a path segment");
            return Err(ServiceError::InvalidUrl);
        }
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response, ServiceError> {
        tracing::debug!(%url, "GitHub request");
        self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "GitHub request failed");
            ServiceError::InvalidResponse
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let url = response.url().clone();
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "Failed to decode GitHub response");
        ServiceError::InvalidResponse
    })
}

/// Stable sort, most stars first.
pub fn sort_by_stars(repositories: &mut [Repository]) {
    repositories.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
}

/// Rejects names that cannot be one path segment: empty, dot segments,
/// separators (`/ ? #`), whitespace and control characters.
///
/// Anything else is left to [`Url::parse`] and the path check in `user_url`.
fn is_valid_username(username: &str) -> bool {
    if username.is_empty() || username == "." || username == ".." {
        return false;
    }
    !username
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, stars: u32) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            description: None,
            language: None,
            stargazers_count: stars,
            forks_count: 0,
            html_url: format!("https://github.com/octocat/repo-{id}"),
        }
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut repos = vec![repo(1, 5), repo(2, 10), repo(3, 5), repo(4, 0), repo(5, 10)];
        sort_by_stars(&mut repos);
        let ids: Vec<u64> = repos.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn username_validation() {
        assert!(is_valid_username("octocat"));
        assert!(is_valid_username("this-user-does-not-exist-xyz"));
        assert!(is_valid_username("a.b_c~d"));
        assert!(is_valid_username("a+b"));
        assert!(is_valid_username("a@b"));
        assert!(is_valid_username("a!b"));
        assert!(is_valid_username("a%41b"));

        assert!(!is_valid_username(""));
        assert!(!is_valid_username("."));
        assert!(!is_valid_username(".."));
        assert!(!is_valid_username("octo cat"));
        assert!(!is_valid_username("octo/cat"));
        assert!(!is_valid_username("octocat?x=1"));
        assert!(!is_valid_username("octo#cat"));
        assert!(!is_valid_username("tab\there"));
        assert!(!is_valid_username("bell\u{7}"));
    }

    #[test]
    fn user_url_keeps_url_characters_literally() {
        let service = GitHubService::new(&GitHubConfig::default()).unwrap();
        for name in ["a+b", "a@b", "a!b", "a%41b", "a..b"] {
            let url = service.user_url(name, None).unwrap();
            assert_eq!(url.path(), format!("/users/{name}"));
        }
    }

    #[test]
    fn user_url_refuses_names_that_would_be_rewritten() {
        let service = GitHubService::new(&GitHubConfig::default()).unwrap();
        for name in ["ünïcode", "a\\b", "a{b}", "a<b"] {
            assert_eq!(
                service.user_url(name, None).unwrap_err(),
                ServiceError::InvalidUrl,
                "{name:?}"
            );
        }
    }

    #[test]
    fn user_url_follows_template() {
        let service = GitHubService::new(&GitHubConfig::default()).unwrap();
        let url = service.user_url("octocat", None).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");

        let url = service.user_url("octocat", Some("repos")).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/repos");
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let config = GitHubConfig {
            base_url: "http://127.0.0.1:9999/".to_string(),
            ..GitHubConfig::default()
        };
        let service = GitHubService::new(&config).unwrap();
        let url = service.user_url("octocat", None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/users/octocat");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = GitHubConfig {
            base_url: "ftp://example.com".to_string(),
            ..GitHubConfig::default()
        };
        assert!(matches!(
            GitHubService::new(&config),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn invalid_username_fails_without_network() {
        // Port 9 (discard) is never contacted: validation fails first.
        let config = GitHubConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..GitHubConfig::default()
        };
        let service = GitHubService::new(&config).unwrap();
        assert_eq!(
            service.fetch_user("").await.unwrap_err(),
            ServiceError::InvalidUrl
        );
        assert_eq!(
            service.fetch_repositories("a b").await.unwrap_err(),
            ServiceError::InvalidUrl
        );
    }
}

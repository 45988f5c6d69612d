//! GitHub client against a local mock API.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{repos_json, serve_octocat, test_config, user_json};
use learning_projects::services::{GitHubService, ServiceError};

fn service(backend: &MockBackend) -> GitHubService {
    GitHubService::new(&test_config(&backend.base_url()).github).unwrap()
}

#[tokio::test]
async fn fetch_user_decodes_profile() {
    let backend = MockBackend::start().await;
    backend
        .route("/users/octocat", MockResponse::json(&user_json("octocat", 8)))
        .await;

    let user = service(&backend).fetch_user("octocat").await.unwrap();
    assert_eq!(user.login, "octocat");
    assert_eq!(user.public_repos, 8);
    assert_eq!(user.display_name(), "The Octocat");
}

#[tokio::test]
async fn requests_hit_exact_path_with_headers() {
    let backend = MockBackend::start().await;
    serve_octocat(&backend, "octocat").await;

    service(&backend).fetch_user("octocat").await.unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users/octocat");
    assert!(requests[0]
        .header("user-agent")
        .is_some_and(|ua| ua.starts_with("learning-projects/")));
    assert_eq!(
        requests[0].header("accept"),
        Some("application/vnd.github+json")
    );
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let backend = MockBackend::start().await;

    let result = service(&backend).fetch_user("nobody-here").await;
    assert_eq!(result.unwrap_err(), ServiceError::NotFound);
}

#[tokio::test]
async fn server_error_is_invalid_response() {
    let backend = MockBackend::start().await;
    backend
        .route("/users/octocat", MockResponse::status(500))
        .await;

    let result = service(&backend).fetch_user("octocat").await;
    assert_eq!(result.unwrap_err(), ServiceError::InvalidResponse);
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let backend = MockBackend::start().await;
    backend
        .route("/users/octocat", MockResponse::json("{ not json"))
        .await;
    backend
        .route("/users/octocat/repos", MockResponse::json(r#"{"id": 1}"#))
        .await;

    let service = service(&backend);
    assert_eq!(
        service.fetch_user("octocat").await.unwrap_err(),
        ServiceError::InvalidResponse
    );
    assert_eq!(
        service.fetch_repositories("octocat").await.unwrap_err(),
        ServiceError::InvalidResponse
    );
}

#[tokio::test]
async fn repositories_sorted_by_stars_stably() {
    let backend = MockBackend::start().await;
    serve_octocat(&backend, "octocat").await;

    let repos = service(&backend).fetch_repositories("octocat").await.unwrap();
    let order: Vec<(u64, u32)> = repos.iter().map(|r| (r.id, r.stargazers_count)).collect();
    assert_eq!(
        order,
        vec![(2, 42), (5, 42), (8, 12), (4, 7), (7, 5), (1, 3), (6, 1), (3, 0)]
    );
}

#[tokio::test]
async fn empty_repository_list_is_fine() {
    let backend = MockBackend::start().await;
    backend
        .route("/users/ghost/repos", MockResponse::json(&repos_json(&[])))
        .await;

    let repos = service(&backend).fetch_repositories("ghost").await.unwrap();
    assert!(repos.is_empty());
}

#[tokio::test]
async fn invalid_username_sends_nothing() {
    let backend = MockBackend::start().await;
    let service = service(&backend);

    for username in ["", "has space", "a/b", ".."] {
        assert_eq!(
            service.fetch_profile(username).await.unwrap_err(),
            ServiceError::InvalidUrl,
            "{username:?}"
        );
    }
    assert_eq!(backend.request_count().await, 0);
}

#[tokio::test]
async fn profile_joins_user_and_repositories() {
    let backend = MockBackend::start().await;
    serve_octocat(&backend, "octocat").await;

    let profile = service(&backend).fetch_profile("octocat").await.unwrap();
    assert_eq!(profile.user.login, "octocat");
    assert_eq!(profile.repositories.len(), 8);
    assert_eq!(profile.repositories[0].stargazers_count, 42);

    let mut paths: Vec<String> = backend.requests().await.into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(paths, vec!["/users/octocat", "/users/octocat/repos"]);
}

#[tokio::test]
async fn profile_of_missing_user_reports_user_error() {
    let backend = MockBackend::start().await;

    let result = service(&backend).fetch_profile("nobody-here").await;
    assert_eq!(result.unwrap_err(), ServiceError::NotFound);
    assert_eq!(backend.request_count().await, 2);
}

#[tokio::test]
async fn profile_fails_when_repositories_fail() {
    let backend = MockBackend::start().await;
    backend
        .route("/users/octocat", MockResponse::json(&user_json("octocat", 8)))
        .await;
    backend
        .route("/users/octocat/repos", MockResponse::status(500))
        .await;

    let result = service(&backend).fetch_profile("octocat").await;
    assert_eq!(result.unwrap_err(), ServiceError::InvalidResponse);
}

#[tokio::test]
async fn url_characters_in_username_reach_templated_path() {
    let backend = MockBackend::start().await;
    backend
        .route("/users/a+b", MockResponse::json(&user_json("a+b", 0)))
        .await;
    let service = service(&backend);

    let user = service.fetch_user("a+b").await.unwrap();
    assert_eq!(user.login, "a+b");

    for username in ["a@b", "a!b", "a%41b"] {
        assert_eq!(
            service.fetch_user(username).await.unwrap_err(),
            ServiceError::NotFound,
            "{username:?}"
        );
    }

    let paths: Vec<String> = backend.requests().await.into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/users/a+b", "/users/a@b", "/users/a!b", "/users/a%41b"]);
}

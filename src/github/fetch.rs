// src/github/fetch.rs
// =============================================================================
// This module fetches a user's repositories from the GitHub REST API.
//
// Strategy:
// - Build the endpoint {api}/users/{username}/repos?per_page={n}&sort=update
// - Make ONE unauthenticated GET request (no pagination, no retries)
// - Treat anything other than 200 OK as a failure
// - Decode the body as a JSON array of repositories
//
// Why not octocrab?
// - We need a single endpoint and six fields
// - A plain reqwest call keeps the error cases easy to see
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling, with a typed error per failure kind
// - Ownership: the response is owned here and dropped on every return path
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::Repository;
use crate::error::{DecodeError, FetchError, GitxError};
use crate::progress::{Progress, Stage};

/// Where the GitHub REST API lives unless configured otherwise.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects API requests that don't carry a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Fetches the public repositories of a GitHub user
//
// Parameters:
//   api_base: REST API root (DEFAULT_API_URL outside of tests)
//   username: GitHub login (e.g., "octocat")
//   per_page: how many repositories to ask for (one page only)
//   progress: where to announce the stages we go through
//
// Returns: Result<Vec<Repository>, GitxError>
//   Success: repositories in the order GitHub sent them
//   Error: FetchError for network/status problems, DecodeError for bad JSON
pub async fn fetch_repos(
    api_base: &str,
    username: &str,
    per_page: u32,
    progress: &Progress,
) -> Result<Vec<Repository>, GitxError> {
    let url = repos_endpoint(api_base, username, per_page).map_err(FetchError::from)?;

    // Create HTTP client for making the request
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)?;

    progress.stage(Stage::Fetching);
    debug!(%url, username, per_page, "requesting repositories");

    let response = client
        .get(url)
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(FetchError::from)?;

    progress.stage(Stage::Verifying);
    let status = response.status();

    if status != StatusCode::OK {
        warn!(username, %status, "GitHub refused the repository listing");
        // Returning drops `response`, which discards the body
        return Err(FetchError::Status {
            username: username.to_string(),
            status,
        }
        .into());
    }

    let body = response.bytes().await.map_err(FetchError::from)?;
    let repos: Vec<Repository> = serde_json::from_slice(&body).map_err(DecodeError::from)?;

    debug!(count = repos.len(), "decoded repositories");
    Ok(repos)
}

// Builds the repository listing URL on top of the API base
//
// Example:
//   ("https://api.github.com", "octocat", 5)
//     -> "https://api.github.com/users/octocat/repos?per_page=5&sort=update"
//
// The username goes in as a path segment, so it is percent-encoded.
fn repos_endpoint(api_base: &str, username: &str, per_page: u32) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(api_base)?;

    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["users", username, "repos"]);

    url.query_pairs_mut()
        .append_pair("per_page", &per_page.to_string())
        .append_pair("sort", "update");

    Ok(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why map_err(FetchError::from) instead of just `?`
//    - `?` converts an error with From, but only ONE step at a time
//    - reqwest::Error -> FetchError -> GitxError is two steps
//    - map_err does the first step, `?` does the second
//
// 2. Why read bytes() and then call serde_json ourselves?
//    - response.json() would report bad JSON as a reqwest::Error
//    - Decoding separately keeps "network broke" and "JSON was wrong" apart
//
// 3. Where is the response closed?
//    - `response` is owned by this function
//    - It is dropped on every return path (early error or success)
//    - Dropping it releases the connection; no explicit close() needed
// -----------------------------------------------------------------------------

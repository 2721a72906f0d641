// src/error.rs
// =============================================================================
// Typed errors for the fetch -> filter -> render pipeline.
//
// Each stage has its own error type so the entry point can tell the user
// *where* things went wrong:
// - FetchError:    could not get a good response from GitHub
// - DecodeError:   the response body was not the JSON we expected
// - TerminalError: we could not find out how big the terminal is
// - RenderError:   the table could not be laid out
//
// GitxError ties them together and knows which stage description to print.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

/// Failures while talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built (TLS backend, etc.)
    #[error("could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured API base could not be turned into an endpoint URL
    #[error("invalid API endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// DNS, connection, TLS or timeout failure, or the body could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered, but not with 200 OK
    #[error("failed to fetch repositories for user {username}: {status}")]
    Status {
        username: String,
        status: reqwest::StatusCode,
    },
}

/// The response body was not a JSON array of repositories.
#[derive(Debug, Error)]
#[error("could not decode repository list: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// The size of the controlling terminal could not be determined.
#[derive(Debug, Error)]
#[error("unable to determine terminal size (is stdout an interactive terminal?)")]
pub struct TerminalError;

/// Failures while building or positioning the table.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

/// Any error the `repos` command can report to the user.
#[derive(Debug, Error)]
pub enum GitxError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl GitxError {
    /// Static description of the pipeline stage that failed.
    ///
    /// Printed in front of the error message, e.g.
    /// "Error during repository fetch: failed to fetch repositories for user x: 404 Not Found"
    pub fn stage(&self) -> &'static str {
        match self {
            GitxError::Fetch(_) | GitxError::Decode(_) => "Error during repository fetch",
            GitxError::Render(_) => "Error rendering repositories table",
        }
    }
}

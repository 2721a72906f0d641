// src/github/repository.rs
// =============================================================================
// The one piece of data this tool cares about: a GitHub repository.
//
// The GitHub API returns ~80 fields per repository. We only decode the six
// we display or filter on; serde ignores the rest.
//
// Rust concepts:
// - serde derive: generate JSON decoding from the struct definition
// - Custom deserializers: turn JSON null into an empty String
// - Private fields + getters: records can't be modified after decoding
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A public repository as listed by `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    name: String,

    /// GitHub sends `null` for repositories without a description
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,

    /// `null` when GitHub could not detect a language
    #[serde(default, deserialize_with = "null_as_empty")]
    language: String,

    #[serde(rename = "updated_at")]
    updated_at: DateTime<Utc>,

    #[serde(rename = "svn_url")]
    url: String,

    #[serde(rename = "fork")]
    is_fork: bool,
}

impl Repository {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Primary language as reported by GitHub, empty if unknown.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_fork(&self) -> bool {
        self.is_fork
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

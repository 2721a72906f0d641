// src/github/mod.rs
// =============================================================================
// This module handles getting repositories out of GitHub.
//
// Currently implements:
// - The Repository record (the six fields we display or filter on)
// - Fetching a user's public repositories from the REST API
// - Filtering out forks and, optionally, other languages
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod filter;
mod repository;

// Re-export the public items so callers can write `github::fetch_repos`
pub use fetch::{fetch_repos, DEFAULT_API_URL};
pub use filter::{filter_repos, ALL_LANGUAGES};
pub use repository::Repository;

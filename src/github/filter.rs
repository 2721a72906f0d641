// src/github/filter.rs
// =============================================================================
// Decides which fetched repositories end up in the table.
//
// Rules:
// - Forks are always dropped
// - With the "all" language filter, every other repository is kept
// - Otherwise a repository is kept when its language, lower-cased, equals
//   the filter exactly (the filter itself is used as given)
//
// Order is preserved: rows appear in the order GitHub returned them.
// =============================================================================

use super::Repository;

/// Language filter value that disables language filtering.
pub const ALL_LANGUAGES: &str = "all";

/// Keep the non-fork repositories matching `language`, in their original order.
pub fn filter_repos(repos: Vec<Repository>, language: &str) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|repo| should_keep(repo, language))
        .collect()
}

fn should_keep(repo: &Repository, language: &str) -> bool {
    if repo.is_fork() {
        return false;
    }
    language == ALL_LANGUAGES || repo.language().to_lowercase() == language
}
